use market_dashboard_core::Panel;
use market_dashboard_widgets::panels::{
    dashboard_layout, render_content, render_controls, render_error, render_header,
    render_message,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

use crate::app::App;

pub fn render_dashboard(app: &mut App, f: &mut Frame<'_>) {
    let [header, controls, body, status] = dashboard_layout(f.area());

    render_header(&app.view, f, header);
    render_controls(&app.view, &app.locations, f, controls);

    if app.locations_loading {
        render_loading("Loading suburbs...", &mut app.throbber, f, body);
    } else if let Some(error) = &app.locations_error {
        render_error(error, f, body);
    } else {
        match app.view.panel() {
            None | Some(Panel::Idle) => {
                render_message("Select a suburb to load market data", Color::Gray, f, body);
            }
            Some(Panel::Loading) => {
                render_loading("Loading market data...", &mut app.throbber, f, body);
            }
            Some(Panel::Error(message)) => render_error(message, f, body),
            Some(Panel::Content) => render_content(&app.view, app.inspect, f, body),
        }
    }

    render_status(&app.status_message, f, status);
}

fn render_loading(label: &str, state: &mut ThrobberState, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = (label.chars().count() as u16 + 2).min(inner.width);
    let spot = Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y + inner.height / 2,
        width,
        height: 1.min(inner.height),
    };

    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    f.render_stateful_widget(throbber, spot, state);
}

fn render_status(message: &str, f: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let line = TextLine::from(vec![
        Span::styled(message.to_string(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("←/→", key),
        Span::raw(" inspect  "),
        Span::styled("r", key),
        Span::raw(" reload  "),
        Span::styled("?", key),
        Span::raw(" help  "),
        Span::styled("q", key),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
