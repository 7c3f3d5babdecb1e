//! Operand buffers
//!
//! An [`Entry`] is either untouched, backspaced down to nothing, or holds
//! the text being typed. Both empty states behave identically for the
//! arithmetic; only the display tells them apart.

use serde::{Deserialize, Serialize};

use crate::core::number::{format_number, parse_number};

/// Text form of an operand being composed or held
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    /// Nothing typed yet
    #[default]
    Empty,
    /// Emptied by backspace; the display shows "0"
    Cleared,
    /// Characters typed so far (never empty)
    Typing(String),
}

impl Entry {
    /// Creates an empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Creates a buffer holding a formatted number
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self::Typing(format_number(value))
    }

    /// Returns true when no characters are held
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !matches!(self, Self::Typing(_))
    }

    /// Typed text, if any
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Typing(text) => Some(text),
            Self::Empty | Self::Cleared => None,
        }
    }

    /// Text this buffer contributes to the display, if any
    #[must_use]
    pub fn shown(&self) -> Option<&str> {
        match self {
            Self::Typing(text) => Some(text),
            Self::Cleared => Some("0"),
            Self::Empty => None,
        }
    }

    /// Parsed value, if the text is a complete number
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.as_str().and_then(parse_number)
    }

    /// Returns true when the buffer already holds a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.as_str().is_some_and(|text| text.contains('.'))
    }

    /// Appends a digit
    pub fn push_digit(&mut self, digit: u8) {
        if let Some(c) = char::from_digit(u32::from(digit), 10) {
            self.push(c);
        }
    }

    /// Appends a decimal point; returns false if one is already present
    pub fn push_decimal(&mut self) -> bool {
        if self.has_decimal() {
            return false;
        }
        self.push('.');
        true
    }

    /// Starts a negative number; returns false unless the buffer is empty
    pub fn push_sign(&mut self) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.push('-');
        true
    }

    /// Removes the last character; returns false if nothing was removed
    pub fn backspace(&mut self) -> bool {
        let Self::Typing(text) = self else {
            return false;
        };
        text.pop();
        if text.is_empty() {
            *self = Self::Cleared;
        }
        true
    }

    /// Resets to the untouched state
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    fn push(&mut self, c: char) {
        match self {
            Self::Typing(text) => text.push(c),
            Self::Empty | Self::Cleared => *self = Self::Typing(c.to_string()),
        }
    }
}
