//! Presentation layer
//!
//! Builds the display line text and draws the calculator face with
//! ratatui. State lives elsewhere; these modules only read it.

pub mod display;
pub mod keypad;
pub mod screen;

pub use display::{DisplayFrame, render_frame};
pub use keypad::Keypad;
pub use screen::{ScreenLayout, draw, split};
