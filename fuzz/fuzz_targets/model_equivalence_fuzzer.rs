//! Fuzz target comparing the engine against the reference model
//!
//! The model only understands digits, the four operators, `=` and `C`; on
//! that key set both must show identical displays after every key.

#![no_main]

use abacus_core::Calculator;
use abacus_harness::{ModelCalculator, ModelKey, ObservableState};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|keys: Vec<ModelKey>| {
    let mut calc = Calculator::new();
    let mut model = ModelCalculator::new();

    for key in keys {
        calc.press(key.token());
        model.apply(key);

        assert_eq!(ObservableState::of(&calc), model.observe(), "diverged after {key:?}");
    }
});
