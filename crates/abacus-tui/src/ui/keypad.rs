//! Keypad grid
//!
//! Five rows of bordered buttons. Operators and commands are accented, the
//! zero key spans two columns and recently pressed keys are drawn reversed.

use std::time::Instant;

use abacus_app::{App, Button};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const COLUMNS: u32 = 4;

/// Render the keypad. Returns each button's area in keypad order.
pub fn render(frame: &mut Frame, app: &App<Instant>, area: Rect) -> Vec<Rect> {
    let keypad = app.keypad();
    let rows: Vec<&[Button]> = keypad.rows().collect();
    let row_count = rows.len() as u32;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    let mut areas = Vec::with_capacity(keypad.buttons().len());
    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                row.iter().map(|button| Constraint::Ratio(if button.is_double { 2 } else { 1 }, COLUMNS)),
            )
            .split(*row_area);

        for (button, cell) in row.iter().zip(cells.iter()) {
            let pressed = keypad.is_pressed(areas.len());
            render_button(frame, button, pressed, *cell);
            areas.push(*cell);
        }
    }
    areas
}

fn render_button(frame: &mut Frame, button: &Button, pressed: bool, area: Rect) {
    let mut style = Style::default();
    let mut border = Style::default().fg(Color::DarkGray);
    if button.is_command {
        style = style.fg(Color::LightBlue).add_modifier(Modifier::BOLD);
        border = border.fg(Color::LightBlue);
    }
    if pressed {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let label = Paragraph::new(Line::from(button.label()).centered()).block(block).style(style);
    frame.render_widget(label, area);
}
