//! Fuzz target for raw key tokens
//!
//! Arbitrary strings are fed straight into `construct_number`. Unknown
//! tokens must be ignored without touching state, and nothing may panic.

#![no_main]

use abacus_core::{Calculator, Effect, Token};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|tokens: Vec<String>| {
    let mut calc = Calculator::new();

    for raw in &tokens {
        let before = (calc.result_text(), calc.sub_result_text(), calc.last_operator());
        let effect = calc.construct_number(raw);

        if Token::parse(raw).is_err() {
            assert_eq!(effect, Effect::Ignored);
            let after = (calc.result_text(), calc.sub_result_text(), calc.last_operator());
            assert_eq!(before, after, "unrecognized token {raw:?} changed state");
        }
    }
});
