//! Status bar
//!
//! Shows the fault message while the calculator is in its error state, and
//! the keyboard bindings otherwise.

use std::time::Instant;

use abacus_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

const HELP: &str = "Enter = | Esc C | n +/- | x * | / ÷ | q quit";

/// Status bar text.
pub fn text(app: &App<Instant>) -> String {
    app.status().unwrap_or_else(|| HELP.to_string())
}

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App<Instant>, area: Rect) {
    let fg = if app.status().is_some() { Color::Red } else { Color::White };

    let paragraph = Paragraph::new(Line::from(format!(" {}", text(app))))
        .style(Style::default().bg(Color::DarkGray).fg(fg));

    frame.render_widget(paragraph, area);
}
