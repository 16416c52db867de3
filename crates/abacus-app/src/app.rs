//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns the calculator
//! engine and the keypad, completely decoupled from terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Resolves keys through the [`crate::keymap`] and feeds tokens to the engine.
//! - Lights keypad buttons for a short pulse after each key press.
//! - Stores terminal dimensions to handle resize events.

use std::{ops::Sub, time::Duration};

use abacus_core::{Calculator, Effect, Token};

use crate::{AppAction, AppConfig, AppEvent, Binding, Keypad, keymap};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App<I> {
    calculator: Calculator,
    keypad: Keypad<I>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl<I> App<I>
where
    I: Copy + Ord + Sub<Output = Duration>,
{
    /// Create a new App.
    pub fn new(config: AppConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config.engine),
            keypad: Keypad::new(config.pulse),
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent<I>) -> Vec<AppAction> {
        match event {
            AppEvent::Key { key, at } => match keymap::binding(key) {
                Some(Binding::Token(token)) => self.press(token, at),
                Some(Binding::Quit) => vec![AppAction::Quit],
                None => vec![],
            },
            AppEvent::Button { index, at } => match self.keypad.button(index) {
                Some(button) => self.press(button.token, at),
                None => {
                    tracing::warn!("Click on unknown keypad button {index}");
                    vec![]
                },
            },
            AppEvent::Tick(now) => {
                if self.keypad.expire(now) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
        }
    }

    fn press(&mut self, token: Token, at: I) -> Vec<AppAction> {
        if self.calculator.press(token) == Effect::Ignored {
            tracing::debug!("Key {token} had no effect");
        }
        self.keypad.press(token, at);
        vec![AppAction::Render]
    }

    /// The calculator engine.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Main display text.
    pub fn result_text(&self) -> String {
        self.calculator.result_text()
    }

    /// Secondary display text.
    pub fn sub_result_text(&self) -> String {
        self.calculator.sub_result_text()
    }

    /// Pending operator glyph, or empty.
    pub fn last_operator(&self) -> &'static str {
        self.calculator.last_operator()
    }

    /// Secondary display followed by the pending operator, e.g. `456 *`.
    pub fn sub_result_line(&self) -> String {
        match self.last_operator() {
            "" => self.sub_result_text(),
            op => format!("{} {op}", self.sub_result_text()),
        }
    }

    /// Status message. `None` unless the engine is faulted.
    pub fn status(&self) -> Option<String> {
        self.calculator.fault().map(|fault| format!("{fault}, press C to clear"))
    }

    /// The keypad and its highlights.
    pub fn keypad(&self) -> &Keypad<I> {
        &self.keypad
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
