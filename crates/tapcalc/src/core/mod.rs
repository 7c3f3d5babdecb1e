//! Core calculator types
//!
//! Operators, operand buffers, the memory register and the notices the
//! engine raises towards the display surface.

mod entry;
pub mod history;
mod memory;
pub mod number;
mod operator;

pub use entry::Entry;
pub use memory::{Clamp, MemoryRegister};
pub use operator::Operator;

use serde::Serialize;
use thiserror::Error;

/// Largest integer an `f64` holds exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Smallest integer an `f64` holds exactly (-(2^53 - 1))
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

/// Result type for arithmetic
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic failures that force a full reset of the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum CalcError {
    /// Divisor was zero
    #[error("Division by zero!")]
    DivisionByZero,
    /// Result was not a finite number
    #[error("Overflow: result is too large to display")]
    Overflow,
}

/// How loudly a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Processing continued
    Warning,
    /// State was reset
    Error,
}

/// User-facing notification raised by a transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Arithmetic failed and the accumulator was cleared
    Error {
        /// What went wrong
        error: CalcError,
    },
    /// Memory exceeded the safe maximum and was capped
    MemoryOverflow {
        /// Value the register now holds
        capped: f64,
    },
    /// Memory fell below the safe minimum and was capped
    MemoryUnderflow {
        /// Value the register now holds
        capped: f64,
    },
}

impl Notice {
    /// Severity of this notice
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Error { .. } => Severity::Error,
            Self::MemoryOverflow { .. } | Self::MemoryUnderflow { .. } => Severity::Warning,
        }
    }

    /// Returns true for notices that reset the accumulator
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity(), Severity::Error)
    }
}

impl From<CalcError> for Notice {
    fn from(error: CalcError) -> Self {
        Self::Error { error }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error { error } => write!(f, "{error}"),
            Self::MemoryOverflow { capped } => write!(
                f,
                "Memory overflow! Value capped at {}.",
                number::format_number(*capped)
            ),
            Self::MemoryUnderflow { capped } => write!(
                f,
                "Memory underflow! Value capped at {}.",
                number::format_number(*capped)
            ),
        }
    }
}
