//! Reference model for model-based testing.
//!
//! [`ModelCalculator`] is a deliberately naive re-statement of the evaluation
//! rules over a reduced key set (digits, operators, `=`, `C`). It keeps the
//! typed operand as text and a flag for "typed since the last operator",
//! without the entry-mode and edit bookkeeping of the real engine. Tests feed
//! the same keys to both and compare [`ObservableState`].

use abacus_core::{ERROR_TEXT, Operator, Token, format};
use arbitrary::Arbitrary;

/// Digits a typed operand may hold, matching the default engine cap.
const MODEL_MAX_DIGITS: usize = abacus_core::DEFAULT_MAX_DIGITS;

/// Key subset understood by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum ModelKey {
    /// Digit key; reduced modulo 10.
    Digit(u8),
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `÷`
    Divide,
    /// `=`
    Equals,
    /// `C`
    Clear,
}

impl ModelKey {
    /// Equivalent engine token.
    pub fn token(self) -> Token {
        match self {
            Self::Digit(d) => Token::Digit(d % 10),
            Self::Add => Token::Operator(Operator::Add),
            Self::Subtract => Token::Operator(Operator::Subtract),
            Self::Multiply => Token::Operator(Operator::Multiply),
            Self::Divide => Token::Operator(Operator::Divide),
            Self::Equals => Token::Equals,
            Self::Clear => Token::Clear,
        }
    }
}

/// Displays compared between model and engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Main display.
    pub result_text: String,
    /// Operand display.
    pub sub_result_text: String,
    /// Operator indicator.
    pub last_operator: String,
}

impl ObservableState {
    /// Observable state of a real engine.
    pub fn of(calc: &abacus_core::Calculator) -> Self {
        Self {
            result_text: calc.result_text(),
            sub_result_text: calc.sub_result_text(),
            last_operator: calc.last_operator().to_string(),
        }
    }
}

/// Reference calculator.
#[derive(Debug, Clone)]
pub struct ModelCalculator {
    /// Operand text last typed (or `"0"`).
    operand: String,
    /// Whether `operand` was typed since the last operator or `=`.
    typing: bool,
    total: f64,
    pending: Option<Operator>,
    repeat: Option<(Operator, f64)>,
    error: bool,
}

impl Default for ModelCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelCalculator {
    /// Create a model in the initial state.
    pub fn new() -> Self {
        Self {
            operand: "0".to_string(),
            typing: false,
            total: 0.0,
            pending: None,
            repeat: None,
            error: false,
        }
    }

    /// Apply one key.
    pub fn apply(&mut self, key: ModelKey) {
        if key == ModelKey::Clear {
            *self = Self::new();
            return;
        }
        if self.error {
            return;
        }

        match key.token() {
            Token::Digit(d) => self.type_digit(d),
            Token::Operator(op) => {
                if self.typing {
                    let value = self.value();
                    let next = match self.pending {
                        Some(pending) => pending.apply(self.total, value),
                        None => Ok(value),
                    };
                    self.settle(next);
                }
                if !self.error {
                    self.pending = Some(op);
                }
                self.typing = false;
            },
            Token::Equals => {
                let value = self.value();
                let next = if let Some(op) = self.pending.take() {
                    self.repeat = Some((op, value));
                    op.apply(self.total, value)
                } else if self.typing {
                    self.repeat = None;
                    Ok(value)
                } else if let Some((op, last)) = self.repeat {
                    op.apply(self.total, last)
                } else {
                    Ok(value)
                };
                self.typing = false;
                self.settle(next);
            },
            Token::DecimalPoint | Token::Clear | Token::ToggleSign | Token::Percent => {},
        }
    }

    /// Observable displays.
    pub fn observe(&self) -> ObservableState {
        if self.error {
            return ObservableState {
                result_text: ERROR_TEXT.to_string(),
                sub_result_text: ERROR_TEXT.to_string(),
                last_operator: String::new(),
            };
        }

        ObservableState {
            result_text: format::format_result(self.total, abacus_core::DEFAULT_RESULT_DECIMALS),
            sub_result_text: self.operand.clone(),
            last_operator: self.pending.map(Operator::glyph).unwrap_or_default().to_string(),
        }
    }

    fn type_digit(&mut self, digit: u8) {
        let c = char::from(b'0' + digit);

        if !self.typing {
            self.operand = c.to_string();
            self.typing = true;
        } else if self.operand == "0" {
            self.operand = c.to_string();
        } else if self.operand.len() < MODEL_MAX_DIGITS {
            self.operand.push(c);
        }
    }

    fn value(&self) -> f64 {
        self.operand.parse().unwrap_or(0.0)
    }

    fn settle(&mut self, next: Result<f64, abacus_core::CalcError>) {
        match next {
            Ok(total) => self.total = total,
            Err(_) => {
                self.error = true;
                self.pending = None;
                self.repeat = None;
            },
        }
    }
}
