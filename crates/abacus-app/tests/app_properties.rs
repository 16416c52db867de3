//! Property-based tests for App state machine.
//!
//! Tests verify that display invariants hold under arbitrary event sequences.

use std::time::{Duration, Instant};

use abacus_app::{App, AppAction, AppConfig, AppEvent, KeyInput};
use proptest::prelude::*;

/// Generate random printable characters for input.
fn printable_char() -> impl Strategy<Value = char> {
    prop::char::range(' ', '~')
}

/// Generate random key inputs.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        6 => printable_char().prop_map(KeyInput::Char),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Esc),
    ]
}

/// Events as offsets in milliseconds from a common start.
#[derive(Debug, Clone)]
enum TimedEvent {
    Key(KeyInput, u64),
    Button(usize, u64),
    Tick(u64),
    Resize(u16, u16),
}

fn event_strategy() -> impl Strategy<Value = TimedEvent> {
    prop_oneof![
        8 => (key_strategy(), 0u64..1_000).prop_map(|(k, t)| TimedEvent::Key(k, t)),
        3 => (0usize..25, 0u64..1_000).prop_map(|(i, t)| TimedEvent::Button(i, t)),
        2 => (0u64..1_000).prop_map(TimedEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| TimedEvent::Resize(c, r)),
    ]
}

fn resolve(event: &TimedEvent, start: Instant) -> AppEvent<Instant> {
    let at = |ms: u64| start + Duration::from_millis(ms);
    match *event {
        TimedEvent::Key(key, ms) => AppEvent::Key { key, at: at(ms) },
        TimedEvent::Button(index, ms) => AppEvent::Button { index, at: at(ms) },
        TimedEvent::Tick(ms) => AppEvent::Tick(at(ms)),
        TimedEvent::Resize(cols, rows) => AppEvent::Resize(cols, rows),
    }
}

proptest! {
    /// Displays stay well-formed under arbitrary event sequences.
    #[test]
    fn displays_well_formed(events in prop::collection::vec(event_strategy(), 0..80)) {
        let start = Instant::now();
        let mut app = App::new(AppConfig::default());

        for event in &events {
            let actions = app.handle(resolve(event, start));
            prop_assert!(actions.len() <= 1);

            let result = app.result_text();
            if app.status().is_some() {
                prop_assert_eq!(result, "Error");
                prop_assert_eq!(app.sub_result_text(), "Error");
            } else {
                let decimals = result.split_once('.').map(|(_, frac)| frac.len());
                prop_assert_eq!(decimals, Some(2), "result {}", result);
            }

            let line = app.sub_result_line();
            prop_assert!(line.ends_with(app.last_operator()));
        }
    }

    /// Only the quit keys produce `Quit`.
    #[test]
    fn quit_only_on_quit_keys(key in key_strategy()) {
        let mut app = App::new(AppConfig::default());
        let actions = app.handle(AppEvent::Key { key, at: Instant::now() });
        let quits = actions.contains(&AppAction::Quit);
        prop_assert_eq!(quits, matches!(key, KeyInput::Char('q' | 'Q')));
    }

    /// A tick past the pulse clears every highlight.
    #[test]
    fn tick_after_pulse_clears(events in prop::collection::vec(event_strategy(), 0..40)) {
        let start = Instant::now();
        let mut app = App::new(AppConfig::default());

        for event in &events {
            app.handle(resolve(event, start));
        }
        app.handle(AppEvent::Tick(start + Duration::from_secs(5)));

        let buttons = app.keypad().buttons().len();
        prop_assert!((0..buttons).all(|i| !app.keypad().is_pressed(i)));
    }
}
