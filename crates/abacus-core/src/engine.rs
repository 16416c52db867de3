//! Calculator state machine.
//!
//! This module defines the [`Calculator`], which consumes key tokens one at a
//! time and maintains everything the displays are derived from.
//!
//! # Evaluation rules
//!
//! - Evaluation is strictly left to right. There is no precedence between
//!   `*`/`÷` and `+`/`-`.
//! - An operator pressed after a new operand resolves the pending operation
//!   first (`5 + 3 -` shows `8`). An operator pressed with no new operand only
//!   replaces the pending operator (`+ -` leaves `-`).
//! - `=` pressed again without a new operand repeats the last operation with
//!   its last operand (`5 + 3 = =` gives `11`).
//! - After `=` the accumulator keeps the last operand. `+/-` and `%` edit that
//!   operand, not the result, and the edited operand then counts as newly
//!   entered: `5 + 3 = +/- +` continues from `-3`, not from `-8`.
//! - Division by zero or an out-of-range result moves the engine into a fault
//!   state that ignores every token except `C`. So does an operand that is
//!   not finite, although the digit cap keeps typed operands well inside
//!   `f64` range.
//!
//! # Displays
//!
//! - [`Calculator::result_text`]: the running result, fixed decimals.
//! - [`Calculator::sub_result_text`]: the operand in progress, verbatim.
//! - [`Calculator::last_operator`]: glyph of the pending operator, or empty.

use crate::{CalcError, ERROR_TEXT, EngineConfig, Operator, Token, format};

/// How the next digit is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Next digit starts a new operand.
    Fresh,
    /// Next digit is appended to the current operand.
    Appending,
}

/// Outcome of a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// State changed; displays may differ.
    Updated,
    /// Token was dropped (redundant, capped, unrecognized or faulted).
    Ignored,
}

/// Four-function calculator engine.
///
/// Pure state machine: no I/O, no clock, no interior mutability. Every
/// observer is recomputed from state on each call.
#[derive(Debug, Clone)]
pub struct Calculator {
    config: EngineConfig,
    /// Operand digits as typed, without sign. Never empty.
    buffer: String,
    /// Operand sign.
    negative: bool,
    /// Running total of the last completed operation.
    result: f64,
    /// Operator waiting for its right-hand operand.
    pending: Option<Operator>,
    entry: EntryMode,
    /// Operand changed since the last operator or `=`.
    edited: bool,
    /// Operator and operand repeated by a bare `=`.
    last_operation: Option<(Operator, f64)>,
    /// Set while the error display is shown.
    fault: Option<CalcError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a calculator with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            buffer: "0".to_string(),
            negative: false,
            result: 0.0,
            pending: None,
            entry: EntryMode::Fresh,
            edited: false,
            last_operation: None,
            fault: None,
        }
    }

    /// Feed one key token from the UI.
    ///
    /// Unrecognized tokens are ignored.
    #[doc(alias = "submit")]
    pub fn construct_number(&mut self, token: &str) -> Effect {
        match Token::parse(token) {
            Ok(token) => self.press(token),
            Err(err) => {
                tracing::debug!("Ignoring key: {err}");
                Effect::Ignored
            },
        }
    }

    /// Apply a parsed token.
    pub fn press(&mut self, token: Token) -> Effect {
        if let Some(fault) = self.fault
            && token != Token::Clear
        {
            tracing::debug!("Ignoring {token} while faulted ({fault})");
            return Effect::Ignored;
        }

        match token {
            Token::Digit(digit) => self.push_digit(digit),
            Token::DecimalPoint => self.push_decimal_point(),
            Token::Operator(op) => self.choose_operator(op),
            Token::Equals => self.equals(),
            Token::Clear => {
                self.reset();
                Effect::Updated
            },
            Token::ToggleSign => {
                self.negative = !self.negative;
                self.edited = true;
                Effect::Updated
            },
            Token::Percent => self.percent(),
        }
    }

    /// Return to the initial state, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    /// Running result, formatted with fixed decimals, or the error text.
    pub fn result_text(&self) -> String {
        if self.fault.is_some() {
            return ERROR_TEXT.to_string();
        }
        format::format_result(self.result, self.config.result_decimals)
    }

    /// Operand in progress exactly as typed, or the error text.
    pub fn sub_result_text(&self) -> String {
        if self.fault.is_some() {
            return ERROR_TEXT.to_string();
        }
        format::signed(&self.buffer, self.negative)
    }

    /// Glyph of the pending operator, empty if none.
    pub fn last_operator(&self) -> &'static str {
        self.pending.map_or("", Operator::glyph)
    }

    /// Numeric value of the operand in progress.
    pub fn operand(&self) -> f64 {
        let magnitude = self.buffer.parse::<f64>().unwrap_or(0.0);
        if self.negative { -magnitude } else { magnitude }
    }

    /// Raw operand buffer, without sign.
    pub fn accumulator(&self) -> &str {
        &self.buffer
    }

    /// Whether the operand is negated.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Running result.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Operator waiting for its right-hand operand.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// How the next digit is entered.
    pub fn entry_mode(&self) -> EntryMode {
        self.entry
    }

    /// Whether the operand changed since the last operator or `=`.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Operation a bare `=` would repeat.
    pub fn last_operation(&self) -> Option<(Operator, f64)> {
        self.last_operation
    }

    /// Active fault. `None` unless the error display is shown.
    pub fn fault(&self) -> Option<CalcError> {
        self.fault
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn max_digits(&self) -> usize {
        self.config.digit_cap()
    }

    /// Replace the operand with `text`.
    ///
    /// The sign survives only when the old operand was a bare zero, which is
    /// how a negative number is started with `+/-` before any digit.
    fn start_operand(&mut self, text: &str) {
        self.negative = self.negative && self.buffer == "0";
        self.buffer.clear();
        self.buffer.push_str(text);
        self.entry = EntryMode::Appending;
        self.edited = true;
    }

    fn push_digit(&mut self, digit: u8) -> Effect {
        let digit = char::from(b'0' + digit.min(9));

        if self.entry == EntryMode::Fresh {
            self.start_operand(digit.encode_utf8(&mut [0; 4]));
            return Effect::Updated;
        }

        if self.buffer == "0" {
            if digit == '0' {
                return Effect::Ignored;
            }
            self.buffer.clear();
        } else if format::digit_count(&self.buffer) >= self.max_digits() {
            tracing::debug!("Digit cap of {} reached", self.max_digits());
            return Effect::Ignored;
        }

        self.buffer.push(digit);
        self.edited = true;
        Effect::Updated
    }

    fn push_decimal_point(&mut self) -> Effect {
        if self.entry == EntryMode::Fresh {
            self.start_operand("0.");
            return Effect::Updated;
        }

        if self.buffer.contains('.') {
            return Effect::Ignored;
        }

        self.buffer.push('.');
        self.edited = true;
        Effect::Updated
    }

    fn choose_operator(&mut self, op: Operator) -> Effect {
        if self.edited {
            let operand = self.operand();
            let outcome = match self.pending {
                Some(pending) => pending.apply(self.result, operand),
                None => finite(operand),
            };

            match outcome {
                Ok(value) => self.result = value,
                Err(err) => return self.fail(err),
            }
        }

        tracing::debug!(result = self.result, "Pending operator {op}");
        self.pending = Some(op);
        self.entry = EntryMode::Fresh;
        self.edited = false;
        Effect::Updated
    }

    fn equals(&mut self) -> Effect {
        let operand = self.operand();

        let outcome = match (self.pending.take(), self.last_operation) {
            (Some(op), _) => {
                self.last_operation = Some((op, operand));
                op.apply(self.result, operand)
            },
            (None, Some((op, last_operand))) if !self.edited => op.apply(self.result, last_operand),
            (None, _) => {
                self.last_operation = None;
                finite(operand)
            },
        };

        self.entry = EntryMode::Fresh;
        self.edited = false;

        match outcome {
            Ok(value) => {
                tracing::debug!(result = value, "Resolved");
                self.result = value;
                Effect::Updated
            },
            Err(err) => self.fail(err),
        }
    }

    fn percent(&mut self) -> Effect {
        let value = self.operand() / 100.0;

        self.negative = value < 0.0;
        self.buffer = format::format_operand(value.abs());
        self.entry = EntryMode::Fresh;
        self.edited = true;
        Effect::Updated
    }

    fn fail(&mut self, err: CalcError) -> Effect {
        tracing::warn!("Calculator fault: {err}");
        self.fault = Some(err);
        self.pending = None;
        self.last_operation = None;
        self.entry = EntryMode::Fresh;
        self.edited = false;
        Effect::Updated
    }
}

/// An operand taken as a result must be finite like any computed one.
fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() { Ok(value) } else { Err(CalcError::Overflow) }
}
