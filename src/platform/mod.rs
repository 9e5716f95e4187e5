//! Platform-specific terminal implementations
//!
//! This module encapsulates the raw terminal interactions and provides
//! a clean interface to the rest of the application.

pub mod terminal;

pub use terminal::{TerminalError, TerminalGuard, install_panic_hook};
