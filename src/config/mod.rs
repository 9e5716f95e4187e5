//! Configuration module for tallypad
//!
//! Concentrates the user-facing settings shared between the CLI, the
//! config file and the rest of the application.

pub mod display;

pub use display::{ConfigError, DisplaySettings, LeadingZeroMode};
