// App module for market-dashboard
// Handles application state and key bindings

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
