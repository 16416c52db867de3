//! Terminal UI for Abacus
//!
//! A thin shell over [`abacus_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`abacus_app::Runtime`]
//!
//! This crate only handles terminal events and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use abacus_app::{App, AppAction, AppConfig, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
