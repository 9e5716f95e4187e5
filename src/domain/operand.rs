//! Operand entry and editing
//!
//! This module manages the string a user is typing into the calculator.
//! It enforces the entry rules (a single decimal point, no leading
//! decimal point, optional leading-zero suppression) and the delete
//! behavior, and converts finished operands to numbers.

use crate::domain::core::Outcome;

/// Policy for appending a zero to an operand that is already "0"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadingZeroPolicy {
    /// Always append, allowing entries like "007"
    #[default]
    Permissive,
    /// Ignore a second leading zero while the operand is exactly "0"
    Suppress,
}

/// A numeric operand under construction
///
/// While the user is typing, the string holds only digits and at most
/// one ".". After an evaluation the operand holds the stringified
/// result verbatim, which may additionally contain "-", "inf" or "NaN";
/// editing continues on that string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Operand {
    raw: String,
}

impl Operand {
    /// Creates a new, empty operand
    ///
    /// # Example
    /// ```rust
    /// use tallypad::domain::operand::Operand;
    ///
    /// let operand = Operand::new();
    /// assert!(operand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { raw: String::new() }
    }

    /// Creates an operand holding an evaluation result
    pub fn from_value(value: f64) -> Self {
        Self {
            raw: value.to_string(),
        }
    }

    /// Returns the raw string as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Checks if the operand is empty (nothing entered)
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Checks if the operand ends with a decimal point
    ///
    /// Such an operand is mid-entry and cannot be captured for an
    /// operation yet.
    pub fn ends_with_point(&self) -> bool {
        self.raw.ends_with('.')
    }

    /// Appends a digit or decimal point
    ///
    /// Rejected inputs leave the operand untouched:
    /// - any character that is not an ASCII digit or "."
    /// - a "." when the operand is empty or already contains one
    /// - a "0" onto an operand that is exactly "0", under the
    ///   suppressing policy
    ///
    /// # Returns
    /// Applied if the character was appended, Ignored otherwise
    pub fn push(&mut self, ch: char, policy: LeadingZeroPolicy) -> Outcome {
        if ch == '.' {
            if self.raw.is_empty() || self.raw.contains('.') {
                return Outcome::Ignored;
            }
        } else if !ch.is_ascii_digit() {
            return Outcome::Ignored;
        } else if ch == '0' && self.raw == "0" && policy == LeadingZeroPolicy::Suppress {
            return Outcome::Ignored;
        }

        self.raw.push(ch);
        Outcome::Applied
    }

    /// Removes the last character
    ///
    /// A lone "-" left behind (deleting from a negative result such as
    /// "-5") collapses to the empty state rather than dangling.
    ///
    /// # Returns
    /// Applied if a character was removed, Ignored if already empty
    pub fn delete_last(&mut self) -> Outcome {
        if self.raw.is_empty() {
            return Outcome::Ignored;
        }

        self.raw.pop();
        if self.raw == "-" {
            self.raw.clear();
        }
        Outcome::Applied
    }

    /// Resets the operand to the empty state
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Parses the operand as a number
    ///
    /// Result strings such as "inf" and "NaN" parse to the matching
    /// non-finite values.
    ///
    /// # Returns
    /// Some(value) if the string parses as f64, None otherwise
    pub fn value(&self) -> Option<f64> {
        self.raw.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(digits: &str) -> Operand {
        let mut operand = Operand::new();
        for ch in digits.chars() {
            operand.push(ch, LeadingZeroPolicy::Permissive);
        }
        operand
    }

    #[test]
    fn digits_concatenate() {
        assert_eq!(typed("123").raw(), "123");
        assert_eq!(typed("10.5").raw(), "10.5");
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        // "1", ".", "2", ".", "3" must end up as "1.23"
        let operand = typed("1.2.3");
        assert_eq!(operand.raw(), "1.23");
    }

    #[test]
    fn leading_decimal_point_is_rejected() {
        let mut operand = Operand::new();
        assert_eq!(operand.push('.', LeadingZeroPolicy::Permissive), Outcome::Ignored);
        assert!(operand.is_empty());
    }

    #[test]
    fn non_digit_characters_are_rejected() {
        let mut operand = typed("12");
        assert_eq!(operand.push('a', LeadingZeroPolicy::Permissive), Outcome::Ignored);
        assert_eq!(operand.push('+', LeadingZeroPolicy::Permissive), Outcome::Ignored);
        assert_eq!(operand.raw(), "12");
    }

    #[test]
    fn permissive_policy_allows_repeated_zeros() {
        let operand = typed("007");
        assert_eq!(operand.raw(), "007");
    }

    #[test]
    fn suppressing_policy_ignores_second_leading_zero() {
        let mut operand = Operand::new();
        operand.push('0', LeadingZeroPolicy::Suppress);
        assert_eq!(operand.push('0', LeadingZeroPolicy::Suppress), Outcome::Ignored);
        assert_eq!(operand.raw(), "0");

        // "0.05" stays possible: the point unblocks further zeros
        operand.push('.', LeadingZeroPolicy::Suppress);
        operand.push('0', LeadingZeroPolicy::Suppress);
        operand.push('5', LeadingZeroPolicy::Suppress);
        assert_eq!(operand.raw(), "0.05");
    }

    #[test]
    fn delete_removes_last_character() {
        let mut operand = typed("12.5");
        operand.delete_last();
        assert_eq!(operand.raw(), "12.");
        operand.delete_last();
        assert_eq!(operand.raw(), "12");
    }

    #[test]
    fn delete_on_empty_is_ignored() {
        let mut operand = Operand::new();
        assert_eq!(operand.delete_last(), Outcome::Ignored);
    }

    #[test]
    fn deleting_to_a_lone_minus_clears_fully() {
        let mut operand = Operand::from_value(-5.0);
        assert_eq!(operand.raw(), "-5");

        assert_eq!(operand.delete_last(), Outcome::Applied);
        assert!(operand.is_empty());
    }

    #[test]
    fn value_parses_results_and_entries() {
        assert_eq!(typed("12.5").value(), Some(12.5));
        assert_eq!(Operand::from_value(7.0).raw(), "7");
        assert!(Operand::from_value(f64::INFINITY).value().unwrap().is_infinite());
        assert_eq!(Operand::new().value(), None);
    }
}
