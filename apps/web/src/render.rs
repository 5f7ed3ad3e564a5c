use market_dashboard_core::{DashboardView, LocationOptions, Panel};
use market_dashboard_widgets::panels::{
    dashboard_layout, render_content, render_controls, render_error, render_header,
    render_message,
};
use ratzilla::ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything one frame needs, borrowed from the app state.
pub struct Screen<'a> {
    pub view: &'a DashboardView,
    pub locations: &'a LocationOptions,
    pub locations_error: Option<&'a str>,
    pub spinner: &'static str,
    pub inspect: Option<usize>,
}

pub fn render_dashboard(screen: &Screen<'_>, f: &mut Frame<'_>, area: Rect) {
    let [header, controls, body, footer] = dashboard_layout(area);

    render_header(screen.view, f, header);
    render_controls(screen.view, screen.locations, f, controls);

    if let Some(error) = screen.locations_error {
        render_error(error, f, body);
    } else {
        match screen.view.panel() {
            None | Some(Panel::Idle) => {
                render_message("Select a suburb to load market data", Color::Gray, f, body);
            }
            Some(Panel::Loading) => render_message(
                &format!("{} Loading market data...", screen.spinner),
                Color::Cyan,
                f,
                body,
            ),
            Some(Panel::Error(message)) => render_error(message, f, body),
            Some(Panel::Content) => render_content(screen.view, screen.inspect, f, body),
        }
    }

    render_footer(f, footer);
}

fn render_footer(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let line = TextLine::from(vec![
        Span::styled("←/→", key),
        Span::raw(" inspect  "),
        Span::styled("r", key),
        Span::raw(" reload"),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
