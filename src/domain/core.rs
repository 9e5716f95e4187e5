//! Core domain vocabulary
//!
//! This module defines the pure domain types shared by the rest of the
//! application: the four arithmetic operations, the commands a user can
//! issue, and the outcome of applying a command. Nothing here knows
//! about terminals or key codes.

/// One of the four binary arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parses an operation from an input character
    ///
    /// Accepts both the ASCII characters produced by a keyboard
    /// ("+", "-", "*", "/", "x") and the display symbols ("−", "×", "÷").
    ///
    /// # Returns
    /// Some(operation) for a recognized character, None otherwise
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operation::Add),
            '-' | '−' => Some(Operation::Subtract),
            '*' | 'x' | '×' => Some(Operation::Multiply),
            '/' | '÷' => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Returns the symbol used when rendering this operation
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '−',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    /// Applies the operation to two operands
    ///
    /// Division by zero follows IEEE-754 semantics: the result is an
    /// infinity or NaN, never a panic.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

/// A command issued against the calculator state machine
///
/// This is the complete input surface: every pointer click or key press
/// the adapters accept is normalized into one of these five commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a digit or decimal point to the current operand
    AppendDigit(char),
    /// Capture the current operand and start a pending operation
    ChooseOperation(Operation),
    /// Evaluate the pending operation
    Evaluate,
    /// Remove the last character of the current operand
    DeleteLast,
    /// Reset all calculator state
    ClearAll,
}

/// Result of applying a command
///
/// Commands never fail; invalid ones are silently ignored. The outcome
/// only exists so callers can trace what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command mutated calculator state
    Applied,
    /// The command was invalid in the current state and did nothing
    Ignored,
}

impl Outcome {
    /// Returns true if the command mutated state
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
