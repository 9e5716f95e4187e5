//! Application orchestration layer
//!
//! This module coordinates between input, domain, UI, and platform
//! layers.

pub mod controller;

pub use controller::{AppController, ControlFlow};
