//! Display formatting
//!
//! Pure functions that turn engine state into display text. Two rules apply:
//!
//! - A completed result is always printed with a fixed number of decimals
//!   (`100` becomes `"100.00"`).
//! - The operand being typed is echoed verbatim (`"12."` stays `"12."`) and is
//!   only re-derived from its numeric value after an in-place transformation
//!   such as `%`.

/// Print a completed result with exactly `decimals` decimal places.
///
/// Negative zero, and negative values that round to zero, print unsigned.
pub fn format_result(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");

    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        },
        _ => text,
    }
}

/// Print an operand as the shortest decimal text that parses back to the same
/// value, without exponent notation (`0.5`, `1250`, `0.0001`).
pub fn format_operand(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { format!("{value}") }
}

/// Prefix a raw operand buffer with its sign.
pub fn signed(buffer: &str, negative: bool) -> String {
    if negative { format!("-{buffer}") } else { buffer.to_string() }
}

/// Number of digit characters in an operand buffer.
pub fn digit_count(buffer: &str) -> usize {
    buffer.bytes().filter(u8::is_ascii_digit).count()
}
