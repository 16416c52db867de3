//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine. Every user-facing event carries the instant
//! it happened at so keypad highlights can be timed against virtual clocks in
//! simulation.

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent<I> {
    /// Keyboard input.
    Key {
        /// Key that was pressed.
        key: KeyInput,
        /// When it was pressed.
        at: I,
    },

    /// A keypad button was clicked.
    Button {
        /// Position in [`crate::Keypad::buttons`].
        index: usize,
        /// When it was clicked.
        at: I,
    },

    /// Periodic tick.
    Tick(I),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
