//! Questionnaire TUI
//!
//! A ratatui front-end over the domain answering flow. The event loop
//! translates key presses into state-machine actions and redraws; all
//! mutation happens one key event at a time.

mod app;
mod keys;
mod state;
mod widgets;

pub use app::{TuiApp, TuiError};
pub use keys::{map_key, KeyAction};
pub use state::TuiState;
pub use widgets::{HelpWidget, IntroWidget, QuestionWidget, ResultsWidget};
