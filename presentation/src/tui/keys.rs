//! Key binding table
//!
//! Maps a key press to an answering-flow action for the current screen.
//! Unmapped keys are ignored, matching the flow's silent no-op contract.

use bigfive_domain::{Rating, Screen};
use crossterm::event::{KeyCode, KeyEvent};

/// What a key press asks the TUI to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Start,
    Select(Rating),
    Next,
    Previous,
    Restart,
    ToggleHelp,
    Quit,
    Ignore,
}

/// Resolve a key press against the current screen
pub fn map_key(key: KeyEvent, screen: Screen) -> KeyAction {
    // Global bindings
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('?') => return KeyAction::ToggleHelp,
        _ => {}
    }

    match screen {
        Screen::Intro => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => KeyAction::Start,
            _ => KeyAction::Ignore,
        },
        Screen::Question(_) => match key.code {
            KeyCode::Char(c @ '1'..='5') => match Rating::try_new(c as u8 - b'0') {
                Some(rating) => KeyAction::Select(rating),
                None => KeyAction::Ignore,
            },
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => KeyAction::Next,
            KeyCode::Left | KeyCode::Char('h') => KeyAction::Previous,
            _ => KeyAction::Ignore,
        },
        Screen::Result => match key.code {
            KeyCode::Char('r') => KeyAction::Restart,
            KeyCode::Enter => KeyAction::Quit,
            _ => KeyAction::Ignore,
        },
    }
}
