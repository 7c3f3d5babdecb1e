//! Memory register clamped to the safe-integer range

use serde::{Deserialize, Serialize};

use crate::core::{Notice, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};

/// Which bound a value was clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clamp {
    /// Capped at the safe maximum
    Overflow,
    /// Capped at the safe minimum
    Underflow,
}

impl Clamp {
    /// Converts into the notice shown to the user
    #[must_use]
    pub const fn notice(self) -> Notice {
        match self {
            Self::Overflow => Notice::MemoryOverflow {
                capped: MAX_SAFE_INTEGER,
            },
            Self::Underflow => Notice::MemoryUnderflow {
                capped: MIN_SAFE_INTEGER,
            },
        }
    }
}

/// Single numeric memory slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    /// Creates a register holding zero
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Current value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the value, clamping into range
    pub fn store(&mut self, value: f64) -> Option<Clamp> {
        let (value, clamp) = clamp(value);
        self.value = value;
        clamp
    }

    /// Adds to the value, clamping the sum into range
    pub fn add(&mut self, delta: f64) -> Option<Clamp> {
        self.store(self.value + delta)
    }

    /// Resets to zero
    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

fn clamp(value: f64) -> (f64, Option<Clamp>) {
    if value > MAX_SAFE_INTEGER {
        (MAX_SAFE_INTEGER, Some(Clamp::Overflow))
    } else if value < MIN_SAFE_INTEGER {
        (MIN_SAFE_INTEGER, Some(Clamp::Underflow))
    } else {
        (value, None)
    }
}
