//! Fuzz target for the Calculator state machine
//!
//! # Strategy
//!
//! - Full key set: digits, decimal point, operators, `=`, `C`, `+/-`, `%`
//! - Engine settings: digit cap and result decimals chosen by the fuzzer
//! - Invariant verification: every standard invariant after every key
//!
//! # Invariants
//!
//! - Operand text is always a well-formed decimal within the digit cap
//! - Error text appears exactly while faulted, and only `C` leaves the fault
//! - Result text always carries the configured decimals

#![no_main]

use abacus_core::{Calculator, EngineConfig, Operator, Token};
use abacus_harness::{EngineSnapshot, InvariantRegistry};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Key {
    Digit(u8),
    DecimalPoint,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

impl Key {
    fn token(self) -> Token {
        match self {
            Key::Digit(d) => Token::Digit(d % 10),
            Key::DecimalPoint => Token::DecimalPoint,
            Key::Add => Token::Operator(Operator::Add),
            Key::Subtract => Token::Operator(Operator::Subtract),
            Key::Multiply => Token::Operator(Operator::Multiply),
            Key::Divide => Token::Operator(Operator::Divide),
            Key::Equals => Token::Equals,
            Key::Clear => Token::Clear,
            Key::ToggleSign => Token::ToggleSign,
            Key::Percent => Token::Percent,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    max_digits: u16,
    result_decimals: u8,
    keys: Vec<Key>,
}

fuzz_target!(|input: Input| {
    let config = EngineConfig {
        max_digits: usize::from(input.max_digits),
        result_decimals: usize::from(input.result_decimals % 8),
    };
    let mut calc = Calculator::with_config(config);
    let registry = InvariantRegistry::standard();

    for key in input.keys {
        let was_faulted = calc.fault().is_some();
        let token = key.token();
        calc.press(token);

        if was_faulted && token != Token::Clear {
            assert!(calc.fault().is_some(), "fault left without C");
        }

        if let Err(violations) = registry.check_all(&EngineSnapshot::capture(&calc)) {
            panic!("invariants violated after {key:?}: {violations:?}");
        }
    }
});
