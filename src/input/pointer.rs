//! Pointer input mapping
//!
//! Translates mouse events into calculator commands by hit-testing the
//! on-screen keypad. Only left-button presses count; motion, drag and
//! scroll events are ignored.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::domain::Command;
use crate::ui::keypad::Keypad;

/// Converts a mouse event into a calculator command
///
/// # Returns
/// Some(command) when a left press lands on a keypad button
pub fn map_mouse_event(mouse: &MouseEvent, keypad: &Keypad) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => keypad.hit(mouse.column, mouse.row),
        _ => None,
    }
}
