//! Keyboard input mapping
//!
//! Translates raw crossterm key events into calculator commands. The
//! mapping is the only place that knows about key codes; everything
//! past this point works in terms of [`Command`].
//!
//! Events carrying Control or Alt are ignored entirely (Ctrl+C being
//! the one exception, as the conventional quit). Shift is allowed
//! through: terminals report shifted symbol keys such as "*" with the
//! SHIFT modifier set, and those must keep working.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::{Command, Operation};

/// An input event after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// A command for the calculator state machine
    Calculator(Command),
    /// Leave the application
    Quit,
}

/// Converts a key event into an input action
///
/// # Returns
/// Some(action) for a recognized key, None for keys that are ignored
pub fn map_key_event(key: &KeyEvent) -> Option<InputAction> {
    // Key-up events would double every press on terminals that report them
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }

    // Any other held control or alt key means the event is not for us
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => {
            Some(InputAction::Calculator(Command::AppendDigit(ch)))
        }
        KeyCode::Char('=') | KeyCode::Enter => Some(InputAction::Calculator(Command::Evaluate)),
        KeyCode::Char('q') => Some(InputAction::Quit),
        KeyCode::Char(ch) => Operation::from_char(ch)
            .map(|op| InputAction::Calculator(Command::ChooseOperation(op))),
        KeyCode::Backspace => Some(InputAction::Calculator(Command::DeleteLast)),
        KeyCode::Esc => Some(InputAction::Calculator(Command::ClearAll)),
        _ => None,
    }
}
