//! tallypad — a keyboard-driven pocket calculator for the terminal
//!
//! The crate is layered the same way top to bottom: `domain` holds the
//! pure calculator state machine, `input` normalizes key and mouse
//! events into commands, `app` dispatches them, `ui` renders, and
//! `platform` owns the terminal itself.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod platform;
pub mod ui;
