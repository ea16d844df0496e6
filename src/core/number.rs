//! Text form of operands and results.
//!
//! Digit entry works on this text form: the digit is appended to the
//! operand's string and the whole string is parsed again.

/// Renders a number for the display.
///
/// Integral values have no fractional part (`12`, not `12.0`), negative zero
/// prints as `0`, and the float sentinels print as `Infinity`, `-Infinity`
/// and `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Appends `digit` to the decimal form of `operand` and parses the result.
///
/// This is string concatenation, not addition: `append_digit(1.0, "2")` is
/// 12. Text that no longer parses (a token that isn't a number, or digits
/// after `Infinity`) gives NaN.
pub fn append_digit(operand: f64, digit: &str) -> f64 {
    let mut text = format_number(operand);
    text.push_str(digit);
    text.parse::<f64>().unwrap_or(f64::NAN)
}
