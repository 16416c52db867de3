//! Display panel
//!
//! Secondary line (operand and pending operator) above the main result.

use std::time::Instant;

use abacus_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the display panel.
pub fn render(frame: &mut Frame, app: &App<Instant>, area: Rect) {
    let result_style = if app.status().is_some() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(app.sub_result_line(), Style::default().fg(Color::DarkGray)))
            .right_aligned(),
        Line::from(Span::styled(app.result_text(), result_style)).right_aligned(),
    ];

    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Gray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
