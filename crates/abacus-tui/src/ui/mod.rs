//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod display;
mod keypad;
mod status;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::App;

/// Width of the calculator column.
pub const CALCULATOR_WIDTH: u16 = 36;

/// Render the entire UI.
///
/// Returns the screen area of each keypad button, in keypad order, for mouse
/// hit testing. Empty when the terminal is too small to lay out.
pub fn render(frame: &mut Frame, app: &App<Instant>) -> Vec<Rect> {
    const DISPLAY_HEIGHT: u16 = 4;
    const KEYPAD_MIN_HEIGHT: u16 = 15;
    const STATUS_HEIGHT: u16 = 1;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(CALCULATOR_WIDTH), Constraint::Fill(1)])
        .split(frame.area());

    let [_, column, _] = columns.as_ref() else {
        return Vec::new();
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(KEYPAD_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(*column);

    let [display_area, keypad_area, status_area] = chunks.as_ref() else {
        return Vec::new();
    };

    display::render(frame, app, *display_area);
    let buttons = keypad::render(frame, app, *keypad_area);
    status::render(frame, app, *status_area);
    buttons
}
