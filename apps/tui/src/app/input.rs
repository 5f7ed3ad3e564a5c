use crossterm::event::KeyCode;
use market_dashboard_core::{PendingRequest, Period};

use crate::app::App;

/// Applies one key press. A returned request must be fetched and settled by the caller.
pub fn handle_input(app: &mut App, key: KeyCode) -> Option<PendingRequest> {
    if app.show_help {
        if matches!(key, KeyCode::Char('?' | 'q') | KeyCode::Esc) {
            app.show_help = false;
        }
        return None;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            None
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            None
        }
        KeyCode::Up | KeyCode::Char('k') => app.previous_location(),
        KeyCode::Down | KeyCode::Char('j') => app.next_location(),
        KeyCode::Tab => app.next_period(),
        KeyCode::BackTab => app.previous_period(),
        KeyCode::Char(c @ '1'..='4') => c
            .to_digit(10)
            .and_then(|digit| Period::from_index(digit as usize - 1))
            .and_then(|period| app.select_period(period)),
        KeyCode::Left | KeyCode::Char('h') => {
            app.move_inspect(false);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.move_inspect(true);
            None
        }
        KeyCode::Char('r') => app.refresh(),
        _ => None,
    }
}
