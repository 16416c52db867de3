//! Key tokens accepted by the engine.
//!
//! The UI forwards one string per key press. [`Token::parse`] maps it onto a
//! closed set of variants, folding keyboard aliases (`/` for `÷`, `x` for `*`)
//! into their canonical operator.

use std::{fmt, str::FromStr};

use crate::CalcError;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `÷`
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Glyph printed in the operator indicator.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Parse an operator symbol, including keyboard aliases.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" | "x" | "X" | "×" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator as `a <op> b`.
    ///
    /// A zero divisor is rejected before dividing. Any non-finite outcome
    /// (overflow past `f64::MAX`) is reported as [`CalcError::Overflow`].
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            },
        };

        if value.is_finite() { Ok(value) } else { Err(CalcError::Overflow) }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `0`-`9`. Always below 10.
    Digit(u8),
    /// `.`
    DecimalPoint,
    /// `+`, `-`, `*`, `÷`
    Operator(Operator),
    /// `=`
    Equals,
    /// `C`
    Clear,
    /// `+/-`
    ToggleSign,
    /// `%`
    Percent,
}

impl Token {
    /// Parse a key token. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, crate::TokenError> {
        let symbol = input.trim();

        if let Some(op) = Operator::from_symbol(symbol) {
            return Ok(Self::Operator(op));
        }

        match symbol {
            "." => Ok(Self::DecimalPoint),
            "=" => Ok(Self::Equals),
            "C" => Ok(Self::Clear),
            "+/-" => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percent),
            _ => match symbol.as_bytes() {
                [b @ b'0'..=b'9'] => Ok(Self::Digit(b - b'0')),
                _ => Err(crate::TokenError::Unrecognized(input.to_string())),
            },
        }
    }

    /// Canonical keypad label.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

        match self {
            Self::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or("0"),
            Self::DecimalPoint => ".",
            Self::Operator(op) => op.glyph(),
            Self::Equals => "=",
            Self::Clear => "C",
            Self::ToggleSign => "+/-",
            Self::Percent => "%",
        }
    }
}

impl FromStr for Token {
    type Err = crate::TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenError;

    #[test]
    fn parses_every_key() {
        assert_eq!(Token::parse("7"), Ok(Token::Digit(7)));
        assert_eq!(Token::parse("."), Ok(Token::DecimalPoint));
        assert_eq!(Token::parse("="), Ok(Token::Equals));
        assert_eq!(Token::parse("C"), Ok(Token::Clear));
        assert_eq!(Token::parse("+/-"), Ok(Token::ToggleSign));
        assert_eq!(Token::parse("%"), Ok(Token::Percent));
        assert_eq!(Token::parse("+"), Ok(Token::Operator(Operator::Add)));
        assert_eq!(Token::parse("-"), Ok(Token::Operator(Operator::Subtract)));
        assert_eq!(Token::parse("*"), Ok(Token::Operator(Operator::Multiply)));
        assert_eq!(Token::parse("÷"), Ok(Token::Operator(Operator::Divide)));
    }

    #[test]
    fn keyboard_aliases_fold_to_canonical_operator() {
        assert_eq!(Token::parse("/"), Ok(Token::Operator(Operator::Divide)));
        assert_eq!(Token::parse("x"), Ok(Token::Operator(Operator::Multiply)));
        assert_eq!(Token::parse("×"), Ok(Token::Operator(Operator::Multiply)));
    }

    #[test]
    fn trims_button_whitespace() {
        assert_eq!(Token::parse(" 9 \n"), Ok(Token::Digit(9)));
        assert_eq!(Token::parse("  +/- "), Ok(Token::ToggleSign));
    }

    #[test]
    fn rejects_unknown_input() {
        for input in ["", "10", "a", "Enter", "c", "++", "√"] {
            assert_eq!(Token::parse(input), Err(TokenError::Unrecognized(input.to_string())));
        }
    }

    #[test]
    fn label_parses_back() {
        let tokens = [
            Token::Digit(0),
            Token::Digit(9),
            Token::DecimalPoint,
            Token::Operator(Operator::Divide),
            Token::Equals,
            Token::Clear,
            Token::ToggleSign,
            Token::Percent,
        ];
        for token in tokens {
            assert_eq!(Token::parse(token.label()), Ok(token));
        }
    }

    #[test]
    fn divide_by_zero_is_detected() {
        assert_eq!(Operator::Divide.apply(4.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(4.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn overflow_is_detected() {
        assert_eq!(Operator::Multiply.apply(f64::MAX, 10.0), Err(CalcError::Overflow));
        assert_eq!(Operator::Add.apply(f64::MAX, f64::MAX), Err(CalcError::Overflow));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), Ok(15.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
    }
}
