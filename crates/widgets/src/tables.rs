use market_dashboard_core::table::{TransactionRow, TRANSACTION_HEADERS};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::ACCENT;

/// Most rows the transactions panel shows before it stops growing.
pub const MAX_VISIBLE_ROWS: usize = 8;

/// Height of the transactions panel for `rows` entries, borders and header included.
pub fn table_height(rows: usize) -> u16 {
    rows.min(MAX_VISIBLE_ROWS) as u16 + 3
}

pub fn render_transactions(rows: &[TransactionRow], f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(TRANSACTION_HEADERS.iter().map(|title| Cell::from(*title))).style(
        Style::default()
            .fg(ACCENT)
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().map(|row| {
        Row::new(row.cells().map(|cell| Cell::from(cell.to_string())))
            .style(Style::default().fg(Color::White))
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(10),
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(
        Block::default()
            .title(format!("Recent Transactions ({})", rows.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_grows_then_caps() {
        assert_eq!(table_height(1), 4);
        assert_eq!(table_height(MAX_VISIBLE_ROWS), 11);
        assert_eq!(table_height(50), 11);
    }
}
