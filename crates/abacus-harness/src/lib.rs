//! Test harness for the Abacus calculator engine.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks over an [`EngineSnapshot`]. Invariants verify WHAT must be true
//! after every key press, not specific scenarios. Use
//! [`InvariantRegistry::standard()`] for the display and operand invariants.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference calculator. Keys are applied to
//! both the model and the real engine, and their observable displays are
//! compared.
//!
//! # Simulation
//!
//! [`SimDriver`] runs the real [`abacus_app::Runtime`] against a scripted key
//! sequence on a virtual clock, recording every rendered frame.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod model;
mod sim_driver;

pub use invariants::{
    EngineSnapshot, FaultDisplay, Invariant, InvariantKind, InvariantRegistry, InvariantResult,
    OperandWellFormed, OperatorIndicator, ResultPrecision, TypedDigitCap, Violation,
};
pub use model::{ModelCalculator, ModelKey, ObservableState};
pub use sim_driver::{RenderedFrame, SimDriver, SimDriverError, VirtualInstant};
