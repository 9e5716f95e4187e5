//! Calculator state machine
//!
//! The whole calculator is three fields: the operand being typed, the
//! operand captured when an operation was chosen, and the pending
//! operation itself. The five command methods are the only way to
//! mutate them. Invalid commands are silently ignored; nothing here
//! can fail or panic.

use crate::domain::core::{Command, Operation, Outcome};
use crate::domain::operand::{LeadingZeroPolicy, Operand};

/// The calculator state machine
///
/// Holds one pending binary operation at most. Choosing a second
/// operation while one is pending evaluates the first (chained
/// evaluation), so `3 + 4 ×` continues from 7.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Calculator {
    current: Operand,
    previous: Operand,
    operation: Option<Operation>,
    policy: LeadingZeroPolicy,
}

impl Calculator {
    /// Creates a calculator in the initial idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a specific leading-zero policy
    pub fn with_policy(policy: LeadingZeroPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Returns the operand currently being typed
    pub fn current(&self) -> &Operand {
        &self.current
    }

    /// Returns the operand captured for the pending operation
    pub fn previous(&self) -> &Operand {
        &self.previous
    }

    /// Returns the pending operation, if one was chosen
    pub fn pending(&self) -> Option<Operation> {
        self.operation
    }

    /// Checks if the calculator is in its initial idle state
    pub fn is_idle(&self) -> bool {
        self.current.is_empty() && self.previous.is_empty() && self.operation.is_none()
    }

    /// Applies a single command
    ///
    /// # Returns
    /// Applied if the command changed state, Ignored otherwise
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::AppendDigit(ch) => self.append_digit(ch),
            Command::ChooseOperation(op) => self.choose_operation(op),
            Command::Evaluate => self.evaluate(),
            Command::DeleteLast => self.delete_last(),
            Command::ClearAll => self.clear_all(),
        }
    }

    /// Appends a digit or decimal point to the current operand
    pub fn append_digit(&mut self, ch: char) -> Outcome {
        self.current.push(ch, self.policy)
    }

    /// Captures the current operand and records a pending operation
    ///
    /// Rejected while the current operand is empty or ends in ".". If an
    /// operation is already pending it is evaluated first, so the new
    /// operation chains onto the intermediate result.
    pub fn choose_operation(&mut self, operation: Operation) -> Outcome {
        if self.current.is_empty() || self.current.ends_with_point() {
            return Outcome::Ignored;
        }

        if !self.previous.is_empty() {
            self.evaluate();
        }

        self.operation = Some(operation);
        self.previous = std::mem::take(&mut self.current);
        Outcome::Applied
    }

    /// Evaluates the pending operation
    ///
    /// A no-op unless an operation is pending, both operands are
    /// present, and both parse as numbers. The result string becomes
    /// the current operand; the previous operand and the pending
    /// operation are cleared together.
    pub fn evaluate(&mut self) -> Outcome {
        let Some(operation) = self.operation else {
            return Outcome::Ignored;
        };
        if self.previous.is_empty() || self.current.is_empty() || self.current.raw() == "." {
            return Outcome::Ignored;
        }
        let (Some(lhs), Some(rhs)) = (self.previous.value(), self.current.value()) else {
            return Outcome::Ignored;
        };

        let result = operation.apply(lhs, rhs);
        self.current = Operand::from_value(result);
        self.previous.clear();
        self.operation = None;
        Outcome::Applied
    }

    /// Removes the last character of the current operand
    pub fn delete_last(&mut self) -> Outcome {
        self.current.delete_last()
    }

    /// Resets all three fields to their initial values
    pub fn clear_all(&mut self) -> Outcome {
        if self.is_idle() {
            return Outcome::Ignored;
        }

        self.current.clear();
        self.previous.clear();
        self.operation = None;
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Drives a calculator through a key-like script: digits and "."
    /// append, "+-*/" choose operations, "=" evaluates.
    fn run(script: &str) -> Calculator {
        let mut calc = Calculator::new();
        for ch in script.chars() {
            match ch {
                '=' => calc.evaluate(),
                _ => match Operation::from_char(ch) {
                    Some(op) => calc.choose_operation(op),
                    None => calc.append_digit(ch),
                },
            };
        }
        calc
    }

    #[test]
    fn starts_idle() {
        let calc = Calculator::new();
        assert!(calc.is_idle());
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn simple_addition() {
        let calc = run("5+3=");
        assert_eq!(calc.current().raw(), "8");
        assert!(calc.previous().is_empty());
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn choosing_an_operation_captures_the_operand() {
        let calc = run("12+");
        assert!(calc.current().is_empty());
        assert_eq!(calc.previous().raw(), "12");
        assert_eq!(calc.pending(), Some(Operation::Add));
    }

    #[test]
    fn chained_operations_evaluate_eagerly() {
        // 3 + 4 × 2 = evaluates 3+4=7 before chaining, so 7×2=14
        let calc = run("3+4*2=");
        assert_eq!(calc.current().raw(), "14");
    }

    #[test]
    fn operation_rejected_without_an_operand() {
        let mut calc = Calculator::new();
        assert_eq!(calc.choose_operation(Operation::Add), Outcome::Ignored);
        assert!(calc.is_idle());
    }

    #[test]
    fn operation_rejected_on_trailing_point() {
        let mut calc = run("5.");
        assert_eq!(calc.choose_operation(Operation::Add), Outcome::Ignored);
        assert_eq!(calc.current().raw(), "5.");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn evaluate_without_pending_operation_is_ignored() {
        let mut calc = run("42");
        assert_eq!(calc.evaluate(), Outcome::Ignored);
        assert_eq!(calc.current().raw(), "42");
    }

    #[test]
    fn evaluate_without_second_operand_is_ignored() {
        let mut calc = run("5+");
        assert_eq!(calc.evaluate(), Outcome::Ignored);
        assert_eq!(calc.previous().raw(), "5");
        assert_eq!(calc.pending(), Some(Operation::Add));
    }

    #[test]
    fn division_by_zero_yields_infinity() {
        let calc = run("5/0=");
        let value = calc.current().value().unwrap();
        assert!(value.is_infinite());
        assert!(value.is_sign_positive());
    }

    #[test]
    fn zero_over_zero_yields_nan() {
        let calc = run("0/0=");
        assert!(calc.current().value().unwrap().is_nan());
    }

    #[test]
    fn subtraction_can_go_negative() {
        let calc = run("3-5=");
        assert_eq!(calc.current().raw(), "-2");
    }

    #[test]
    fn deleting_a_negative_result_collapses_cleanly() {
        let mut calc = run("3-8=");
        assert_eq!(calc.current().raw(), "-5");

        calc.delete_last();
        assert!(calc.current().is_empty());
    }

    #[test]
    fn results_chain_into_the_next_entry() {
        // After "=", typing digits extends the result string
        let mut calc = run("5+3=");
        calc.append_digit('0');
        assert_eq!(calc.current().raw(), "80");
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut calc = run("12+34");
        assert_eq!(calc.clear_all(), Outcome::Applied);
        assert!(calc.is_idle());
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut calc = run("12+34");
        calc.clear_all();
        assert_eq!(calc.clear_all(), Outcome::Ignored);
        assert!(calc.is_idle());
    }

    #[test]
    fn commands_dispatch_through_apply() {
        let mut calc = Calculator::new();
        calc.apply(Command::AppendDigit('7'));
        calc.apply(Command::ChooseOperation(Operation::Multiply));
        calc.apply(Command::AppendDigit('6'));
        calc.apply(Command::Evaluate);
        assert_eq!(calc.current().raw(), "42");

        calc.apply(Command::DeleteLast);
        assert_eq!(calc.current().raw(), "4");
        calc.apply(Command::ClearAll);
        assert!(calc.is_idle());
    }

    #[test]
    fn suppressing_policy_reaches_the_operand() {
        let mut calc = Calculator::with_policy(LeadingZeroPolicy::Suppress);
        calc.append_digit('0');
        assert_eq!(calc.append_digit('0'), Outcome::Ignored);
        assert_eq!(calc.current().raw(), "0");
    }
}
