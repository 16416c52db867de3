//! Invariant tests over arbitrary key sequences.
//!
//! Every reachable engine state, including faults and `%`-derived operands,
//! must satisfy the standard invariant registry.

use abacus_core::{Calculator, EngineConfig, Operator, Token};
use abacus_harness::{EngineSnapshot, InvariantKind, InvariantRegistry};
use proptest::prelude::*;

/// Generate any key token.
fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        6 => (0u8..10).prop_map(Token::Digit),
        1 => Just(Token::DecimalPoint),
        2 => prop::sample::select(Operator::ALL.to_vec()).prop_map(Token::Operator),
        2 => Just(Token::Equals),
        1 => Just(Token::Clear),
        1 => Just(Token::ToggleSign),
        1 => Just(Token::Percent),
    ]
}

/// Generate raw key strings, including ones the engine must ignore.
fn raw_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => token_strategy().prop_map(|t| t.label().to_string()),
        1 => prop::sample::select(vec!["/", "x", " 7 ", "", "Enter", "√", "++", "1.5"])
            .prop_map(str::to_string),
        1 => "\\PC{0,3}",
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_key(tokens in prop::collection::vec(token_strategy(), 0..100)) {
        let mut calc = Calculator::new();
        let invariants = InvariantRegistry::standard();

        for token in tokens {
            calc.press(token);
            let snapshot = EngineSnapshot::capture(&calc);
            let checked = invariants.check_all(&snapshot);
            prop_assert!(checked.is_ok(), "after {:?}: {:?}", token, checked);
        }
    }

    #[test]
    fn prop_invariants_hold_for_raw_input(keys in prop::collection::vec(raw_key_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        let invariants = InvariantRegistry::standard();

        for key in &keys {
            calc.construct_number(key);
            let checked = invariants.check_all(&EngineSnapshot::capture(&calc));
            prop_assert!(checked.is_ok(), "after {:?}: {:?}", key, checked);
        }
    }

    #[test]
    fn prop_invariants_hold_with_custom_config(
        max_digits in prop_oneof![0usize..6, 6usize..40, 300usize..2_000],
        result_decimals in 0usize..5,
        tokens in prop::collection::vec(token_strategy(), 0..60),
    ) {
        let mut calc = Calculator::with_config(EngineConfig { max_digits, result_decimals });
        let invariants = InvariantRegistry::standard();

        for token in tokens {
            calc.press(token);
            let checked = invariants.check_all(&EngineSnapshot::capture(&calc));
            prop_assert!(checked.is_ok(), "after {:?}: {:?}", token, checked);
        }
    }
}

proptest! {
    /// Long runs of nines under an oversized cap never reach `inf`.
    #[test]
    fn prop_long_operands_stay_finite(
        max_digits in 16usize..2_000,
        runs in prop::collection::vec((1usize..400, prop::sample::select(Operator::ALL.to_vec())), 1..4),
    ) {
        let mut calc = Calculator::with_config(EngineConfig { max_digits, ..EngineConfig::default() });
        let invariants = InvariantRegistry::standard();

        for (len, op) in runs {
            for _ in 0..len {
                calc.press(Token::Digit(9));
            }
            for token in [Token::Operator(op), Token::Digit(9), Token::Equals] {
                calc.press(token);
                prop_assert!(calc.result().is_finite());
                let checked = invariants.check_all(&EngineSnapshot::capture(&calc));
                prop_assert!(checked.is_ok(), "after {:?}: {:?}", token, checked);
            }
        }
    }
}

#[test]
fn fault_state_satisfies_invariants() {
    let mut calc = Calculator::new();
    for key in ["4", "÷", "0", "="] {
        calc.construct_number(key);
    }

    let snapshot = EngineSnapshot::capture(&calc);
    assert!(snapshot.faulted);
    assert!(InvariantRegistry::standard().check_all(&snapshot).is_ok());
}

#[test]
fn corrupted_snapshot_is_reported() {
    let mut snapshot = EngineSnapshot::capture(&Calculator::new());
    snapshot.accumulator = "1..".to_string();
    snapshot.last_operator = "+";

    let violations = InvariantRegistry::standard().check_all(&snapshot).err().unwrap_or_default();

    assert!(violations.iter().any(|v| v.invariant == InvariantKind::OperandWellFormed));
    assert!(violations.iter().any(|v| v.invariant == InvariantKind::OperatorIndicator));
}
