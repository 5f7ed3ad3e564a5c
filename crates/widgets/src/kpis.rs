use market_dashboard_core::{KpiView, Sentiment};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::{NEGATIVE, POSITIVE};

pub const fn growth_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => POSITIVE,
        Sentiment::Negative => NEGATIVE,
    }
}

pub fn render_kpis(kpis: &KpiView, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        ("Median Price", kpis.median_price.as_str(), Color::White),
        (
            "5-Year Growth",
            kpis.growth.text.as_str(),
            growth_color(kpis.growth.sentiment),
        ),
        ("Rental Yield", kpis.avg_yield.as_str(), Color::White),
    ];

    for ((title, value, color), card_area) in cards.into_iter().zip(layout.iter()) {
        let paragraph = Paragraph::new(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );
        f.render_widget(paragraph, *card_area);
    }
}
