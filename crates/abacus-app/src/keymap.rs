//! Keyboard equivalents.
//!
//! Maps physical keys onto calculator tokens. Most keys are their own token
//! (`7`, `+`, `%`); the rest follow the usual desktop calculator bindings:
//!
//! | Key        | Token |
//! |------------|-------|
//! | `Esc`, `c` | `C`   |
//! | `Enter`    | `=`   |
//! | `x`, `X`   | `*`   |
//! | `/`        | `÷`   |
//! | `n`        | `+/-` |
//!
//! `q` and Ctrl+C quit.

use abacus_core::Token;

use crate::KeyInput;

/// What a key press means to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Forward a token to the calculator.
    Token(Token),
    /// Leave the application.
    Quit,
}

/// Resolve a key to its binding. `None` for keys with no meaning.
pub fn binding(key: KeyInput) -> Option<Binding> {
    match key {
        KeyInput::Esc => Some(Binding::Token(Token::Clear)),
        KeyInput::Enter => Some(Binding::Token(Token::Equals)),
        KeyInput::Interrupt | KeyInput::Char('q' | 'Q') => Some(Binding::Quit),
        KeyInput::Char('c') => Some(Binding::Token(Token::Clear)),
        KeyInput::Char('n') => Some(Binding::Token(Token::ToggleSign)),
        KeyInput::Char(c) => Token::parse(c.encode_utf8(&mut [0; 4])).ok().map(Binding::Token),
    }
}
