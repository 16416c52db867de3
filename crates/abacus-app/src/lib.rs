//! Application layer for Abacus
//!
//! Pure state machines and generic runtime for the calculator UI, enabling
//! deterministic simulation testing with the same code that runs in the
//! terminal.
//!
//! # Components
//!
//! - [`App`]: UI state machine (key handling, keypad pulses, displays)
//! - [`Keypad`]: button layout and pressed-pulse tracking
//! - [`keymap`]: keyboard equivalents for calculator tokens
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod config;
mod driver;
mod event;
mod input;
pub mod keymap;
mod keypad;
mod runtime;

pub use abacus_core::{Calculator, EngineConfig, Token};
pub use action::AppAction;
pub use app::App;
pub use config::{AppConfig, DEFAULT_PULSE};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use keymap::Binding;
pub use keypad::{BUTTON_COUNT, Button, Keypad};
pub use runtime::Runtime;
