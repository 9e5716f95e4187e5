//! Application controller and coordination layer
//!
//! The controller owns the calculator and the display settings, applies
//! normalized input actions, and hands the UI a ready-to-draw frame.
//! It is the one place where ignored commands get traced.

use tracing::debug;

use crate::config::DisplaySettings;
use crate::domain::{Calculator, Command, Outcome};
use crate::input::InputAction;
use crate::ui::{DisplayFrame, render_frame};

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Main application controller
///
/// Coordinates between the input adapters, the calculator state machine
/// and the UI. Stable configuration (display settings) lives here; the
/// transient state lives in the calculator.
pub struct AppController {
    calculator: Calculator,
    settings: DisplaySettings,
}

impl AppController {
    /// Creates a controller with an idle calculator
    pub fn new(settings: DisplaySettings) -> Self {
        let calculator = Calculator::with_policy(settings.leading_zeros.policy());
        Self {
            calculator,
            settings,
        }
    }

    /// Read access to the calculator, for rendering and tests
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The active display settings
    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Handles one normalized input action
    ///
    /// # Returns
    /// Quit when the action ends the session, Continue otherwise
    pub fn handle_action(&mut self, action: InputAction) -> ControlFlow {
        match action {
            InputAction::Quit => {
                debug!("quit requested");
                ControlFlow::Quit
            }
            InputAction::Calculator(command) => {
                self.handle_command(command);
                ControlFlow::Continue
            }
        }
    }

    /// Applies a calculator command, tracing the outcome
    pub fn handle_command(&mut self, command: Command) -> Outcome {
        let outcome = self.calculator.apply(command);
        match outcome {
            Outcome::Applied => {
                debug!(?command, current = %self.calculator.current().raw(), "applied")
            }
            Outcome::Ignored => debug!(?command, "ignored (invalid in current state)"),
        }
        outcome
    }

    /// Builds the current display frame
    pub fn display_frame(&self) -> DisplayFrame {
        render_frame(&self.calculator, &self.settings)
    }
}
