//! Input adapters
//!
//! Translation from raw terminal events (keys, mouse) into the
//! normalized commands the calculator understands. Nothing here
//! mutates state.

pub mod keyboard;
pub mod pointer;

pub use keyboard::{InputAction, map_key_event};
pub use pointer::map_mouse_event;
