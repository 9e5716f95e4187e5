//! The two calculator display lines
//!
//! Builds the text content of the display surfaces from calculator
//! state: the upper "previous operand + operation" line and the lower
//! "current operand" line. Pure string construction, no drawing.

use crate::config::DisplaySettings;
use crate::domain::Calculator;
use crate::domain::format::format_operand;

/// The rendered text of both display lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayFrame {
    /// "previous operand + operation symbol", or empty
    pub previous: String,
    /// The formatted current operand
    pub current: String,
}

/// Builds a display frame from the calculator state
pub fn render_frame(calculator: &Calculator, settings: &DisplaySettings) -> DisplayFrame {
    let separator = settings.separator();

    let previous = match calculator.pending() {
        Some(operation) if !calculator.previous().is_empty() => {
            format!(
                "{} {}",
                format_operand(calculator.previous().raw(), separator),
                operation.symbol()
            )
        }
        _ => String::new(),
    };

    let current = if calculator.current().is_empty() {
        if settings.show_idle_zero {
            "0".to_string()
        } else {
            String::new()
        }
    } else {
        format_operand(calculator.current().raw(), separator)
    };

    DisplayFrame { previous, current }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operation;
    use pretty_assertions::assert_eq;

    fn frame(calculator: &Calculator) -> DisplayFrame {
        render_frame(calculator, &DisplaySettings::default())
    }

    #[test]
    fn idle_state_shows_nothing() {
        let calc = Calculator::new();
        let frame = frame(&calc);
        assert_eq!(frame.previous, "");
        assert_eq!(frame.current, "");
    }

    #[test]
    fn idle_zero_policy_shows_a_zero() {
        let calc = Calculator::new();
        let settings = DisplaySettings {
            show_idle_zero: true,
            ..DisplaySettings::default()
        };
        assert_eq!(render_frame(&calc, &settings).current, "0");
    }

    #[test]
    fn typed_operand_appears_grouped() {
        let mut calc = Calculator::new();
        for ch in "1234.5".chars() {
            calc.append_digit(ch);
        }
        assert_eq!(frame(&calc).current, "1,234.5");
    }

    #[test]
    fn pending_operation_fills_the_upper_line() {
        let mut calc = Calculator::new();
        for ch in "1500".chars() {
            calc.append_digit(ch);
        }
        calc.choose_operation(Operation::Multiply);

        let frame = frame(&calc);
        assert_eq!(frame.previous, "1,500 ×");
        assert_eq!(frame.current, "");
    }

    #[test]
    fn evaluation_clears_the_upper_line() {
        let mut calc = Calculator::new();
        calc.append_digit('5');
        calc.choose_operation(Operation::Add);
        calc.append_digit('3');
        calc.evaluate();

        let frame = frame(&calc);
        assert_eq!(frame.previous, "");
        assert_eq!(frame.current, "8");
    }

    #[test]
    fn division_by_zero_renders_infinity() {
        let mut calc = Calculator::new();
        calc.append_digit('5');
        calc.choose_operation(Operation::Divide);
        calc.append_digit('0');
        calc.evaluate();

        assert_eq!(frame(&calc).current, "∞");
    }

    #[test]
    fn configured_separator_reaches_both_lines() {
        let mut calc = Calculator::new();
        for ch in "1000".chars() {
            calc.append_digit(ch);
        }
        calc.choose_operation(Operation::Add);
        for ch in "2000".chars() {
            calc.append_digit(ch);
        }

        let settings = DisplaySettings {
            thousands_separator: " ".to_string(),
            ..DisplaySettings::default()
        };
        let frame = render_frame(&calc, &settings);
        assert_eq!(frame.previous, "1 000 +");
        assert_eq!(frame.current, "2 000");
    }
}
