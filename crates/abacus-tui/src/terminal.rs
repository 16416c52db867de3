//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard and mouse events and ratatui for rendering.

use std::{
    io::{self, Stdout, stdout},
    time::{Duration, Instant},
};

use abacus_app::{App, AppEvent, Driver};
use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use thiserror::Error;

use crate::{KeyInput, ui};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). Remembers where
/// each keypad button was last drawn so mouse clicks can be mapped back to
/// buttons.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    tick: Duration,
    /// Screen area of each keypad button, in keypad order.
    button_areas: Vec<Rect>,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    ///
    /// A tick is delivered whenever no terminal event arrives within `tick`.
    pub fn new(tick: Duration) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let mut out = stdout();
        out.execute(EnterAlternateScreen)?;
        out.execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, tick, button_areas: Vec::new() })
    }

    /// Convert crossterm `KeyEvent` to `KeyInput`.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyInput::Interrupt)
            },
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            _ => None,
        }
    }

    /// Keypad button under the given cell.
    fn button_at(button_areas: &[Rect], column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        button_areas.iter().position(|area| area.contains(position))
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Instant = Instant;

    async fn poll_event(&mut self) -> Result<Option<AppEvent<Instant>>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                let at = Instant::now();
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key_event).map(|key| AppEvent::Key { key, at }))
                    },
                    Some(Ok(Event::Mouse(mouse)))
                        if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                    {
                        Ok(Self::button_at(&self.button_areas, mouse.column, mouse.row)
                            .map(|index| AppEvent::Button { index, at }))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => Ok(Some(AppEvent::Resize(cols, rows))),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    // Input closed
                    None => Ok(Some(AppEvent::Key { key: KeyInput::Interrupt, at })),
                    _ => Ok(None),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(self.tick) => {
                Ok(Some(AppEvent::Tick(Instant::now())))
            }
        }
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn render(&mut self, app: &App<Instant>) -> Result<(), Self::Error> {
        let mut button_areas = Vec::new();
        self.terminal.draw(|frame| {
            button_areas = ui::render(frame, app);
        })?;
        self.button_areas = button_areas;
        Ok(())
    }

    fn stop(&mut self) {
        self.button_areas.clear();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = out.execute(DisableMouseCapture);
        let _ = disable_raw_mode();
        let _ = out.execute(LeaveAlternateScreen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn converts_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            TerminalDriver::convert_key(key(KeyCode::Char('7'), none)),
            Some(KeyInput::Char('7'))
        );
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Enter, none)), Some(KeyInput::Enter));
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Esc, none)), Some(KeyInput::Esc));
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Tab, none)), None);
        assert_eq!(TerminalDriver::convert_key(key(KeyCode::Backspace, none)), None);
    }

    #[test]
    fn ctrl_c_interrupts() {
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(TerminalDriver::convert_key(event), Some(KeyInput::Interrupt));
    }

    #[test]
    fn hit_testing() {
        let areas = [Rect::new(0, 0, 9, 3), Rect::new(9, 0, 9, 3)];
        assert_eq!(TerminalDriver::button_at(&areas, 4, 1), Some(0));
        assert_eq!(TerminalDriver::button_at(&areas, 9, 2), Some(1));
        assert_eq!(TerminalDriver::button_at(&areas, 18, 0), None);
        assert_eq!(TerminalDriver::button_at(&areas, 4, 3), None);
    }
}
