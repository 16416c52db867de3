//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use abacus_core::{ERROR_TEXT, EntryMode, format};

use super::{EngineSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// Operand buffer must be a finite decimal with at most one point.
///
/// The buffer is never empty, holds only ASCII digits and `.`, and parses to a
/// finite `f64`.
pub struct OperandWellFormed;

impl Invariant for OperandWellFormed {
    fn kind(&self) -> InvariantKind {
        InvariantKind::OperandWellFormed
    }

    fn check(&self, state: &EngineSnapshot) -> InvariantResult {
        let buffer = &state.accumulator;
        let violation = |message: String| Err(Violation { invariant: self.kind(), message });

        if buffer.is_empty() {
            return violation("operand buffer is empty".to_string());
        }

        if let Some(c) = buffer.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
            return violation(format!("unexpected {c:?} in operand {buffer:?}"));
        }

        if buffer.matches('.').count() > 1 {
            return violation(format!("more than one decimal point in {buffer:?}"));
        }

        match buffer.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(()),
            _ => violation(format!("operand {buffer:?} is not a finite number")),
        }
    }
}

/// Operands being typed never exceed the digit cap.
///
/// Only checked while appending: `%` re-derives the operand from its value and
/// may legitimately need more digits than a user can type.
pub struct TypedDigitCap;

impl Invariant for TypedDigitCap {
    fn kind(&self) -> InvariantKind {
        InvariantKind::TypedDigitCap
    }

    fn check(&self, state: &EngineSnapshot) -> InvariantResult {
        let digits = format::digit_count(&state.accumulator);
        let cap = state.max_digits.max(1);

        if state.entry == EntryMode::Appending && digits > cap {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "operand {:?} has {digits} digits, cap is {cap}",
                    state.accumulator
                ),
            });
        }
        Ok(())
    }
}

/// The error text appears on both displays exactly while faulted, with no
/// pending operator.
pub struct FaultDisplay;

impl Invariant for FaultDisplay {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FaultDisplay
    }

    fn check(&self, state: &EngineSnapshot) -> InvariantResult {
        let shows_error = state.result_text == ERROR_TEXT || state.sub_result_text == ERROR_TEXT;

        let message = if state.faulted {
            if state.result_text != ERROR_TEXT || state.sub_result_text != ERROR_TEXT {
                Some(format!(
                    "faulted but displays are {:?} / {:?}",
                    state.result_text, state.sub_result_text
                ))
            } else if state.pending.is_some() {
                Some("faulted with a pending operator".to_string())
            } else {
                None
            }
        } else if shows_error {
            Some("error text shown without a fault".to_string())
        } else {
            None
        };

        match message {
            Some(message) => Err(Violation { invariant: self.kind(), message }),
            None => Ok(()),
        }
    }
}

/// Result text carries exactly the configured number of decimals.
pub struct ResultPrecision;

impl Invariant for ResultPrecision {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ResultPrecision
    }

    fn check(&self, state: &EngineSnapshot) -> InvariantResult {
        if state.faulted {
            return Ok(());
        }

        let text = &state.result_text;
        let decimals = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());

        if decimals != state.result_decimals || text.parse::<f64>().is_err() {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "result {text:?} does not have {} decimals",
                    state.result_decimals
                ),
            });
        }
        Ok(())
    }
}

/// Operator indicator mirrors the pending operator.
pub struct OperatorIndicator;

impl Invariant for OperatorIndicator {
    fn kind(&self) -> InvariantKind {
        InvariantKind::OperatorIndicator
    }

    fn check(&self, state: &EngineSnapshot) -> InvariantResult {
        let expected = state.pending.map_or("", |op| op.glyph());

        if state.last_operator != expected {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "indicator shows {:?}, pending operator is {expected:?}",
                    state.last_operator
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use abacus_core::{Calculator, Operator};

    use super::*;

    fn healthy() -> EngineSnapshot {
        EngineSnapshot::capture(&Calculator::new())
    }

    #[test]
    fn detects_double_decimal_point() {
        let snapshot = EngineSnapshot { accumulator: "1.2.3".to_string(), ..healthy() };
        assert!(OperandWellFormed.check(&snapshot).is_err());
    }

    #[test]
    fn detects_sign_inside_buffer() {
        let snapshot = EngineSnapshot { accumulator: "-4".to_string(), ..healthy() };
        assert!(OperandWellFormed.check(&snapshot).is_err());
    }

    #[test]
    fn detects_typed_operand_past_cap() {
        let snapshot = EngineSnapshot {
            accumulator: "1234".to_string(),
            entry: EntryMode::Appending,
            max_digits: 3,
            ..healthy()
        };
        assert!(TypedDigitCap.check(&snapshot).is_err());

        let derived = EngineSnapshot { entry: EntryMode::Fresh, ..snapshot };
        assert!(TypedDigitCap.check(&derived).is_ok());
    }

    #[test]
    fn detects_error_text_without_fault() {
        let snapshot = EngineSnapshot { result_text: ERROR_TEXT.to_string(), ..healthy() };
        assert!(FaultDisplay.check(&snapshot).is_err());
    }

    #[test]
    fn detects_fault_without_error_text() {
        let snapshot = EngineSnapshot { faulted: true, ..healthy() };
        assert!(FaultDisplay.check(&snapshot).is_err());
    }

    #[test]
    fn detects_wrong_precision() {
        let snapshot = EngineSnapshot { result_text: "1.5".to_string(), ..healthy() };
        assert!(ResultPrecision.check(&snapshot).is_err());
    }

    #[test]
    fn detects_stale_indicator() {
        let snapshot = EngineSnapshot { pending: Some(Operator::Add), ..healthy() };
        let violation = OperatorIndicator.check(&snapshot).err();
        assert_eq!(violation.map(|v| v.invariant), Some(InvariantKind::OperatorIndicator));
    }
}
