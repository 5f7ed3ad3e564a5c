//! Whole-panel layouts: header, selectors, the message and error panels, and the content panel.

use market_dashboard_core::chart::ChartSlot;
use market_dashboard_core::{DashboardView, LocationOptions, Period};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::charts::{render_inspect, render_market_chart};
use crate::kpis::render_kpis;
use crate::tables::{render_transactions, table_height};
use crate::{ACCENT, NEGATIVE};

/// Rows of the outer layout: header, controls, body, key hints.
pub fn dashboard_layout(area: Rect) -> [Rect; 4] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(area)
}

pub fn render_header(view: &DashboardView, f: &mut Frame<'_>, area: Rect) {
    let (title, details) = view.header().map_or(("Property Market Insights", ""), |header| {
        (header.title.as_str(), header.details.as_str())
    });

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            details.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ]);

    let block = Block::default()
        .title("Suburb Market Dashboard")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Suburb selector on the left, period tabs on the right.
pub fn render_controls(
    view: &DashboardView,
    locations: &LocationOptions,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    f.render_widget(
        Paragraph::new(selector_text(locations))
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .title("Suburb (↑/↓)")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            ),
        layout[0],
    );

    let titles = Period::ALL
        .iter()
        .map(|period| TextLine::from(period.short_label()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(view.active_period().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"))
        .block(
            Block::default()
                .title("Period (1-4/Tab)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );

    f.render_widget(tabs, layout[1]);
}

pub fn selector_text(locations: &LocationOptions) -> String {
    locations.selected().map_or_else(
        || "(no suburbs)".to_string(),
        |suburb| {
            format!(
                "◀ {} ▶  ({}/{})",
                suburb.display_name,
                locations.selected_index().unwrap_or(0) + 1,
                locations.entries().len()
            )
        },
    )
}

pub fn render_message(message: &str, color: Color, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );
    f.render_widget(paragraph, area);
}

pub fn render_error(message: &str, f: &mut Frame<'_>, area: Rect) {
    let text = Text::from(vec![
        TextLine::from(Span::styled(
            message.to_string(),
            Style::default().fg(NEGATIVE).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Pick another suburb or period, or press r to retry",
            Style::default().fg(Color::Gray),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(NEGATIVE)),
        );
    f.render_widget(paragraph, area);
}

/// KPI cards, the charts side by side, the inspect line and the transactions table.
pub fn render_content(view: &DashboardView, inspect: Option<usize>, f: &mut Frame<'_>, area: Rect) {
    let table_rows = view.table().map_or(0, |rows| table_height(rows.len()));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
            Constraint::Length(table_rows),
        ])
        .split(area);

    if let Some(kpis) = view.kpis() {
        render_kpis(kpis, f, layout[0]);
    }

    let price = view.chart(ChartSlot::Price);
    let yields = view.chart(ChartSlot::Yield);
    let chart_areas = if price.is_some() && yields.is_some() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[1])
            .to_vec()
    } else {
        vec![layout[1]]
    };
    for (spec, chart_area) in price.into_iter().chain(yields).zip(chart_areas) {
        render_market_chart(spec, f, chart_area);
    }

    render_inspect(price.into_iter().chain(yields), inspect, f, layout[2]);

    if let Some(rows) = view.table() {
        render_transactions(rows, f, layout[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data;
    use market_dashboard_core::{Dashboard, MarketFormat, Settled, Suburb};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn rendered_view() -> DashboardView {
        let mut dashboard = Dashboard::with_format(MarketFormat::default(), Period::TenYears);
        let mut view = DashboardView::new(Period::TenYears);
        let Some(pending) = dashboard.select_location("GANSW704074813", &mut view) else {
            panic!("request issued");
        };
        assert_eq!(
            dashboard.settle(pending.token, Ok(test_data::market_data()), &mut view),
            Settled::Rendered
        );
        view
    }

    fn draw(
        render: impl FnOnce(&mut Frame<'_>),
    ) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(120, 32))?;
        terminal.draw(render)?;
        Ok(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect())
    }

    #[test]
    fn content_shows_kpis_charts_and_transactions() -> TestResult {
        let view = rendered_view();

        let text = draw(|f| render_content(&view, None, f, f.area()))?;

        assert!(text.contains("$1,250,000"));
        assert!(text.contains("-3.1%"));
        assert!(text.contains("3.85%"));
        assert!(text.contains("Rental Yield"));
        assert!(text.contains("Recent Transactions (1)"));
        assert!(text.contains("12 Ocean Street"));
        Ok(())
    }

    #[test]
    fn header_falls_back_before_the_first_render() -> TestResult {
        let view = DashboardView::new(Period::TenYears);

        let text = draw(|f| render_header(&view, f, f.area()))?;

        assert!(text.contains("Property Market Insights"));
        Ok(())
    }

    #[test]
    fn selector_counts_position_in_the_list() {
        let suburb = |gnaf_id: &str, name: &str| Suburb {
            name: format!("{name}, NSW"),
            gnaf_id: gnaf_id.to_string(),
            display_name: name.to_string(),
            address: String::new(),
        };
        let mut locations = LocationOptions::new(vec![
            suburb("GANSW704074813", "Belmont North"),
            suburb("GANSW704074999", "Floraville"),
        ]);

        assert_eq!(selector_text(&locations), "(no suburbs)");
        locations.select_initial(Some("GANSW704074999"));
        assert_eq!(selector_text(&locations), "◀ Floraville ▶  (2/2)");
    }
}
