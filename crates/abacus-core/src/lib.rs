//! Calculator core for Abacus
//!
//! The arithmetic/state engine behind the calculator UI. Consumes one key
//! token at a time and exposes the three strings the UI displays, with no
//! dependency on any presentation layer.
//!
//! # Components
//!
//! - [`Calculator`]: state machine owning the accumulator, running result and
//!   pending operator
//! - [`Token`]: parsed key token (digit, operator, control key)
//! - [`format`]: pure display formatting
//! - [`EngineConfig`]: digit cap and result precision

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod engine;
mod error;
pub mod format;
mod token;

pub use config::{
    DEFAULT_MAX_DIGITS, DEFAULT_RESULT_DECIMALS, ERROR_TEXT, EngineConfig, MAX_EXACT_DIGITS,
};
pub use engine::{Calculator, Effect, EntryMode};
pub use error::{CalcError, TokenError};
pub use token::{Operator, Token};
