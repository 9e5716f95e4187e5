//! Display formatting for operands
//!
//! Numbers are shown with thousands grouping on the integer part while
//! the decimal suffix is passed through exactly as typed, so an entry
//! in progress like "1234." renders as "1,234." without rounding or
//! regrouping.

/// Formats an operand string for display
///
/// The string is split on the first ".". The integer part is parsed as
/// a number and grouped in threes with `separator`; the decimal part,
/// when present (even empty, from a trailing "."), is appended raw.
///
/// Non-finite values render textually ("∞", "-∞", "NaN"); an integer
/// part that does not parse at all renders as the empty string.
pub fn format_operand(raw: &str, separator: char) -> String {
    match raw.split_once('.') {
        Some((integer, decimal)) => {
            format!("{}.{}", format_integer_part(integer, separator), decimal)
        }
        None => format_integer_part(raw, separator),
    }
}

/// Formats the integer part of an operand
fn format_integer_part(part: &str, separator: char) -> String {
    let Ok(value) = part.parse::<f64>() else {
        // Empty or unparseable: render nothing rather than "NaN"
        return String::new();
    };

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }

    // is_sign_negative keeps the minus on "-0.5", whose integer part
    // parses to negative zero
    let negative = value.is_sign_negative();
    let digits = format!("{:.0}", value.abs());
    let grouped = group_digits(&digits, separator);

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Groups a plain digit string in threes from the right
fn group_digits(digits: &str, separator: char) -> String {
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(separator);
        }
        reversed.push(ch);
    }
    reversed.chars().rev().collect()
}
