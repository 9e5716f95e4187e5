//! Terminal setup and teardown
//!
//! Owns the side-effectful terminal state: raw mode, the alternate
//! screen and optional mouse capture. Everything is acquired through an
//! RAII guard and restored in Drop, and a panic hook restores the
//! terminal before the panic message prints, so no code path leaves the
//! user's shell in raw mode.

use std::io::{self, Stdout};
use std::panic;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use thiserror::Error;

/// Errors that can occur while acquiring the terminal
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to initialize terminal: {0}")]
    Init(#[source] io::Error),
}

/// RAII wrapper around the raw-mode terminal
///
/// Dropping the guard leaves the alternate screen, releases mouse
/// capture and disables raw mode, in reverse acquisition order.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_capture: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen
    ///
    /// # Arguments
    /// * `mouse_capture` - Also capture mouse events for keypad clicks
    pub fn new(mouse_capture: bool) -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::Init)?;

        let mut stdout = io::stdout();
        let mut setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            execute!(stdout, EnterAlternateScreen)?;
            if mouse_capture {
                execute!(stdout, EnableMouseCapture)?;
            }
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            terminal.clear()?;
            terminal.hide_cursor()?;
            Ok(terminal)
        };

        match setup() {
            Ok(terminal) => Ok(Self {
                terminal,
                mouse_capture,
            }),
            Err(err) => {
                // Raw mode is already on; undo it before reporting
                let _ = disable_raw_mode();
                Err(TerminalError::Init(err))
            }
        }
    }

    /// The ratatui terminal for drawing
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.mouse_capture {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}

/// Installs a panic hook that restores the terminal first
///
/// Without this, a panic inside the draw loop would print its message
/// into a raw-mode alternate screen and vanish with it.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
