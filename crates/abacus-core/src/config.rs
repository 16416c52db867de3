//! Engine configuration.

/// Largest digit cap the engine honors.
///
/// `f64` holds every integer up to 2^53 (about 9.007e15) exactly, so any
/// 15-digit integer survives parsing unchanged while some 16-digit ones do
/// not (`9999999999999999` reads back as `1e16`).
pub const MAX_EXACT_DIGITS: usize = 15;

/// Maximum number of digit characters the accumulator accepts.
pub const DEFAULT_MAX_DIGITS: usize = MAX_EXACT_DIGITS;

/// Decimal places used when printing a completed result.
pub const DEFAULT_RESULT_DECIMALS: usize = 2;

/// Text shown on both displays while the engine is faulted.
pub const ERROR_TEXT: &str = "Error";

/// Tunables for a [`crate::Calculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Digit characters accepted in the accumulator before input is dropped.
    /// Clamped to `1..=MAX_EXACT_DIGITS`, see [`EngineConfig::digit_cap`].
    pub max_digits: usize,
    /// Fixed decimal places of the result display.
    pub result_decimals: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_digits: DEFAULT_MAX_DIGITS, result_decimals: DEFAULT_RESULT_DECIMALS }
    }
}

impl EngineConfig {
    /// Digit cap actually enforced: `max_digits` clamped to
    /// `1..=MAX_EXACT_DIGITS`.
    pub fn digit_cap(&self) -> usize {
        self.max_digits.clamp(1, MAX_EXACT_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_cap_is_clamped() {
        let cap = |max_digits| EngineConfig { max_digits, ..EngineConfig::default() }.digit_cap();

        assert_eq!(cap(0), 1);
        assert_eq!(cap(7), 7);
        assert_eq!(cap(15), 15);
        assert_eq!(cap(400), MAX_EXACT_DIGITS);
        assert_eq!(EngineConfig::default().digit_cap(), 15);
    }
}
