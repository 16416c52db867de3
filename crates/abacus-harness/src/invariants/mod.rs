//! Invariant checking for calculator testing.
//!
//! Invariants are properties that must always hold between key presses.
//! Unlike example-based tests that check specific sequences, invariants
//! verify behavioral properties across all reachable states.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from a
//! [`abacus_core::Calculator`] into an [`EngineSnapshot`], then runs
//! registered [`Invariant`] checks against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = EngineSnapshot::capture(&calc);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{
    FaultDisplay, OperandWellFormed, OperatorIndicator, ResultPrecision, TypedDigitCap,
};
pub use snapshot::EngineSnapshot;

/// Identifies an invariant in violation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// Operand buffer is a finite decimal with at most one point.
    OperandWellFormed,
    /// Typed operands never exceed the digit cap.
    TypedDigitCap,
    /// Fault state and error text appear together.
    FaultDisplay,
    /// Result text carries exactly the configured decimals.
    ResultPrecision,
    /// Operator indicator mirrors the pending operator.
    OperatorIndicator,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Violated invariant.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against engine state.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant identifier for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against a snapshot.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &EngineSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against a snapshot.
/// Use [`InvariantRegistry::standard()`] for the engine invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard engine invariants.
    ///
    /// Includes:
    /// - [`OperandWellFormed`]: operand parses, one decimal point at most
    /// - [`TypedDigitCap`]: typed operands respect the digit cap
    /// - [`FaultDisplay`]: error text shown exactly while faulted
    /// - [`ResultPrecision`]: result text has the configured decimals
    /// - [`OperatorIndicator`]: indicator matches the pending operator
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(OperandWellFormed);
        registry.add(TypedDigitCap);
        registry.add(FaultDisplay);
        registry.add(ResultPrecision);
        registry.add(OperatorIndicator);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &EngineSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
