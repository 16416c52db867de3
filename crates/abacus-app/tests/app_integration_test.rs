//! Integration tests for App behavior.
//!
//! # Oracle Pattern
//!
//! Each test types the keys a user would type, then checks the two displays,
//! the operator indicator and the keypad highlights.

use std::time::{Duration, Instant};

use abacus_app::{App, AppAction, AppConfig, AppEvent, EngineConfig, KeyInput};

/// Type a string of keys at `at`, one event per character.
fn type_keys(app: &mut App<Instant>, keys: &str, at: Instant) -> Vec<AppAction> {
    keys.chars().flat_map(|c| app.handle(AppEvent::Key { key: KeyInput::Char(c), at })).collect()
}

#[test]
fn arithmetic_via_keyboard() {
    let now = Instant::now();
    let mut app = App::new(AppConfig::default());

    type_keys(&mut app, "12+7", now);
    assert_eq!(app.sub_result_line(), "7 +");

    app.handle(AppEvent::Key { key: KeyInput::Enter, at: now });
    assert_eq!(app.result_text(), "19.00");
    assert_eq!(app.sub_result_line(), "7");
}

#[test]
fn slash_and_x_are_operators() {
    let now = Instant::now();
    let mut app = App::new(AppConfig::default());

    type_keys(&mut app, "9/4=", now);
    assert_eq!(app.result_text(), "2.25");

    type_keys(&mut app, "x2=", now);
    assert_eq!(app.result_text(), "4.50");
}

#[test]
fn escape_clears() {
    let now = Instant::now();
    let mut app = App::new(AppConfig::default());

    type_keys(&mut app, "5*5=", now);
    app.handle(AppEvent::Key { key: KeyInput::Esc, at: now });

    assert_eq!(app.result_text(), "0.00");
    assert_eq!(app.sub_result_line(), "0");
    assert_eq!(app.last_operator(), "");
}

#[test]
fn clicks_and_keys_are_interchangeable() {
    let now = Instant::now();
    let mut typed = App::new(AppConfig::default());
    let mut clicked = App::new(AppConfig::default());

    type_keys(&mut typed, "7-2=", now);
    for label in ["7", "-", "2", "="] {
        let index = clicked
            .keypad()
            .buttons()
            .iter()
            .position(|button| button.label() == label)
            .unwrap_or(usize::MAX);
        clicked.handle(AppEvent::Button { index, at: now });
    }

    assert_eq!(typed.result_text(), clicked.result_text());
    assert_eq!(typed.sub_result_line(), clicked.sub_result_line());
    assert_eq!(clicked.result_text(), "5.00");
}

#[test]
fn highlight_follows_pulse() {
    let start = Instant::now();
    let config = AppConfig { pulse: Duration::from_millis(250), ..AppConfig::default() };
    let mut app = App::new(config);

    type_keys(&mut app, "8", start);
    type_keys(&mut app, "+", start + Duration::from_millis(200));

    app.handle(AppEvent::Tick(start + Duration::from_millis(300)));
    let pressed: Vec<&str> = app
        .keypad()
        .buttons()
        .iter()
        .enumerate()
        .filter(|(i, _)| app.keypad().is_pressed(*i))
        .map(|(_, b)| b.label())
        .collect();
    assert_eq!(pressed, vec!["+"]);

    app.handle(AppEvent::Tick(start + Duration::from_millis(450)));
    assert!((0..app.keypad().buttons().len()).all(|i| !app.keypad().is_pressed(i)));
}

#[test]
fn ignored_keys_still_render() {
    let now = Instant::now();
    let config = AppConfig {
        engine: EngineConfig { max_digits: 2, ..EngineConfig::default() },
        ..AppConfig::default()
    };
    let mut app = App::new(config);

    type_keys(&mut app, "12", now);
    let actions = type_keys(&mut app, "3", now);

    assert_eq!(actions, vec![AppAction::Render]);
    assert_eq!(app.sub_result_text(), "12");
}

#[test]
fn error_until_clear() {
    let now = Instant::now();
    let mut app = App::new(AppConfig::default());

    type_keys(&mut app, "1/0=", now);
    assert_eq!(app.result_text(), "Error");
    assert!(app.status().is_some());

    type_keys(&mut app, "5+5=", now);
    assert_eq!(app.result_text(), "Error");

    type_keys(&mut app, "c", now);
    assert_eq!(app.result_text(), "0.00");
    assert_eq!(app.status(), None);
}
