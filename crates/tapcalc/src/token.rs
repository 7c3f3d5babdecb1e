//! Input tokens
//!
//! One token per button press. The text form is what the command line and
//! the REPL accept: single characters for digits and operators, short words
//! for the control keys.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::core::Operator;

/// Errors from reading tokens out of text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Text did not name any key
    #[error("unknown key `{0}`")]
    Unknown(String),
}

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset the accumulator
    Clear,
    /// Remove the last typed character
    Backspace,
    /// MS
    MemoryStore,
    /// MR
    MemoryRecall,
    /// MC
    MemoryClear,
    /// M+
    MemoryAdd,
}

impl Token {
    /// Digit token, if `d` is 0-9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns true for operator tokens
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true for tokens that append to the operand being typed
    #[must_use]
    pub const fn is_append(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal)
    }

    /// Maps a single character to a token
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).and_then(|d| Self::digit(d as u8)),
            '.' | ',' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '<' | '⌫' => Some(Self::Backspace),
            'c' | 'C' => Some(Self::Clear),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        let token = match word.to_ascii_lowercase().as_str() {
            "clear" | "ac" => Self::Clear,
            "bs" | "backspace" | "del" => Self::Backspace,
            "equals" => Self::Equals,
            "ms" => Self::MemoryStore,
            "mr" => Self::MemoryRecall,
            "mc" => Self::MemoryClear,
            "m+" => Self::MemoryAdd,
            _ => return None,
        };
        Some(token)
    }

    /// Keypad label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".into(),
            Self::Operator(op) => op.symbol().into(),
            Self::Equals => "=".into(),
            Self::Clear => "C".into(),
            Self::Backspace => "⌫".into(),
            Self::MemoryStore => "MS".into(),
            Self::MemoryRecall => "MR".into(),
            Self::MemoryClear => "MC".into(),
            Self::MemoryAdd => "M+".into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(token) = Self::from_keyword(s) {
            return Ok(token);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| TokenError::Unknown(s.to_string())),
            _ => Err(TokenError::Unknown(s.to_string())),
        }
    }
}

/// Splits text into tokens
///
/// Whitespace separates words. A word naming a control key (`ms`, `m+`,
/// `clear`, ...) is one token; any other word is read one character at a
/// time, so `12+3=` and `12 + 3 =` are the same sequence.
pub fn parse_tokens(input: &str) -> Result<Vec<Token>, TokenError> {
    let mut tokens = Vec::new();
    for word in input.split_whitespace() {
        if let Some(token) = Token::from_keyword(word) {
            tokens.push(token);
            continue;
        }
        for c in word.chars() {
            let token = Token::from_char(c).ok_or_else(|| TokenError::Unknown(c.to_string()))?;
            tokens.push(token);
        }
    }
    Ok(tokens)
}
