//! CLI output formatting.

use compound_core::Operand;

/// Format an amount as currency: `$1,643.62`.
///
/// Negative amounts keep the sign after the symbol (`$-95.39`).
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount.is_sign_negative() && !rounds_to_zero {
        "-"
    } else {
        ""
    };
    format!("${sign}{}.{cents}", group_thousands(whole))
}

/// Format a decimal rate as a percentage with one decimal: `0.05` -> `5.0%`.
#[must_use]
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Format a real quantity, keeping one decimal on whole values: `10.0`, `2.5`.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Format a count, dropping the decimal on whole values: `4`, `2.5`.
#[must_use]
pub fn format_count(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Format an operand with `format`, or echo it verbatim when it is not numeric.
#[must_use]
pub fn format_operand(operand: &Operand, format: fn(f64) -> String) -> String {
    match operand.as_number() {
        Some(value) => format(value),
        None => operand.to_string(),
    }
}

/// Insert thousand separators into a string of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
