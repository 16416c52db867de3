//! On-screen keypad.
//!
//! Nineteen buttons in five rows. Every button is a calculator [`Token`];
//! clicking one feeds the token to the engine, and typing its keyboard
//! equivalent lights it up for a short pulse.

use std::{ops::Sub, time::Duration};

use abacus_core::{Operator, Token};

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// Token fed to the calculator.
    pub token: Token,
    /// Command buttons (operators, clear, sign, percent) get accent styling.
    pub is_command: bool,
    /// Occupies two columns.
    pub is_double: bool,
}

impl Button {
    const fn digit(value: u8) -> Self {
        Self { token: Token::Digit(value), is_command: false, is_double: false }
    }

    const fn command(token: Token) -> Self {
        Self { token, is_command: true, is_double: false }
    }

    /// Text printed on the button face.
    pub fn label(&self) -> &'static str {
        self.token.label()
    }
}

/// Number of buttons on the keypad.
pub const BUTTON_COUNT: usize = 19;

const BUTTONS: [Button; BUTTON_COUNT] = [
    Button::command(Token::Clear),
    Button::command(Token::ToggleSign),
    Button::command(Token::Percent),
    Button::command(Token::Operator(Operator::Divide)),
    Button::digit(7),
    Button::digit(8),
    Button::digit(9),
    Button::command(Token::Operator(Operator::Multiply)),
    Button::digit(4),
    Button::digit(5),
    Button::digit(6),
    Button::command(Token::Operator(Operator::Subtract)),
    Button::digit(1),
    Button::digit(2),
    Button::digit(3),
    Button::command(Token::Operator(Operator::Add)),
    Button { token: Token::Digit(0), is_command: false, is_double: true },
    Button { token: Token::DecimalPoint, is_command: false, is_double: false },
    Button::command(Token::Equals),
];

/// Buttons per row, top to bottom.
const ROW_LENGTHS: [usize; 5] = [4, 4, 4, 4, 3];

/// Keypad layout plus the pressed pulse of each button.
#[derive(Debug, Clone)]
pub struct Keypad<I> {
    pulse: Duration,
    /// When each button was last pressed. `None` once the pulse has expired.
    pressed: [Option<I>; BUTTON_COUNT],
}

impl<I> Keypad<I>
where
    I: Copy + Ord + Sub<Output = Duration>,
{
    /// Create a keypad whose highlights last `pulse`.
    pub fn new(pulse: Duration) -> Self {
        Self { pulse, pressed: [None; BUTTON_COUNT] }
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> &'static [Button] {
        &BUTTONS
    }

    /// Buttons grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &'static [Button]> {
        let mut rest: &'static [Button] = &BUTTONS;
        ROW_LENGTHS.into_iter().map(move |len| {
            let (row, tail) = rest.split_at(len.min(rest.len()));
            rest = tail;
            row
        })
    }

    /// Button at `index`, if any.
    pub fn button(&self, index: usize) -> Option<Button> {
        BUTTONS.get(index).copied()
    }

    /// Position of the button carrying `token`.
    pub fn position(&self, token: Token) -> Option<usize> {
        BUTTONS.iter().position(|button| button.token == token)
    }

    /// Highlight the button carrying `token`. Returns whether a button matched.
    pub fn press(&mut self, token: Token, at: I) -> bool {
        match self.position(token).and_then(|index| self.pressed.get_mut(index)) {
            Some(slot) => {
                *slot = Some(at);
                true
            },
            None => false,
        }
    }

    /// Whether the button at `index` is currently highlighted.
    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed.get(index).is_some_and(Option::is_some)
    }

    /// Clear highlights older than the pulse. Returns whether any were cleared.
    pub fn expire(&mut self, now: I) -> bool {
        let pulse = self.pulse;
        let mut changed = false;
        for slot in &mut self.pressed {
            if let Some(at) = *slot
                && now >= at
                && now - at >= pulse
            {
                *slot = None;
                changed = true;
            }
        }
        changed
    }

    /// Highlight duration.
    pub fn pulse(&self) -> Duration {
        self.pulse
    }
}
