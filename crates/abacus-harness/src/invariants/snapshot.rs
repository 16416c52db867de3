//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the engine at a point in time.
//! Invariants operate on snapshots rather than live state so a check sees one
//! consistent view.

use abacus_core::{Calculator, EntryMode, Operator};

/// Snapshot of a calculator between key presses.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    /// Main display.
    pub result_text: String,
    /// Operand display.
    pub sub_result_text: String,
    /// Operator indicator.
    pub last_operator: &'static str,
    /// Raw operand buffer, without sign.
    pub accumulator: String,
    /// Operand sign.
    pub negative: bool,
    /// Pending operator.
    pub pending: Option<Operator>,
    /// Digit entry mode.
    pub entry: EntryMode,
    /// Whether the engine shows the error display.
    pub faulted: bool,
    /// Enforced digit cap ([`abacus_core::EngineConfig::digit_cap`]).
    pub max_digits: usize,
    /// Configured result decimals.
    pub result_decimals: usize,
}

impl EngineSnapshot {
    /// Capture the observable state of `calc`.
    pub fn capture(calc: &Calculator) -> Self {
        Self {
            result_text: calc.result_text(),
            sub_result_text: calc.sub_result_text(),
            last_operator: calc.last_operator(),
            accumulator: calc.accumulator().to_string(),
            negative: calc.is_negative(),
            pending: calc.pending_operator(),
            entry: calc.entry_mode(),
            faulted: calc.fault().is_some(),
            max_digits: calc.config().digit_cap(),
            result_decimals: calc.config().result_decimals,
        }
    }
}
