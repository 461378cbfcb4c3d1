//! Presentation layer for bigfive
//!
//! This crate contains the clap CLI definition, the ratatui questionnaire
//! TUI, and the console/JSON score formatters. It drives the domain state
//! machine and reads the score summary for display — the core exposes no
//! other surface to it.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use tui::{TuiApp, TuiError};
