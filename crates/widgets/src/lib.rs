// Dashboard widgets drawn by both the terminal and the browser front ends
pub mod charts;
pub mod kpis;
pub mod panels;
pub mod tables;

#[cfg(test)]
mod test_data;

use market_dashboard_core::chart::Rgb;
use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(37, 99, 235);
pub const POSITIVE: Color = Color::Rgb(16, 185, 129);
pub const NEGATIVE: Color = Color::Rgb(239, 68, 68);

pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_maps_to_terminal_colours() {
        assert_eq!(rgb(Rgb(37, 99, 235)), Color::Rgb(37, 99, 235));
    }
}
