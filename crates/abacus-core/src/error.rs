//! Calculator error types.

use thiserror::Error;

/// Arithmetic faults.
///
/// Never returned from [`crate::Calculator`] entry points. The engine moves
/// into its error display state instead and waits for `C`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Result is not a finite `f64`.
    #[error("result out of range")]
    Overflow,
}

/// Token parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Input is not part of the calculator's key set.
    #[error("unrecognized token: {0:?}")]
    Unrecognized(String),
}
