//! Completed calculations

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::number::format_number;
use crate::core::Operator;

/// A successful evaluation, operands as they were shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Left operand
    pub lhs: String,
    /// Operator applied
    pub operator: Operator,
    /// Right operand
    pub rhs: String,
    /// Rounded result
    pub result: f64,
}

impl Calculation {
    /// `lhs op rhs`
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), format_number(self.result))
    }
}

/// The last few calculations, oldest first
///
/// A capacity of 0 turns recording off.
#[derive(Debug, Clone)]
pub struct History {
    calculations: VecDeque<Calculation>,
    capacity: usize,
}

impl History {
    /// Calculations kept unless configured otherwise
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates an empty history
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            calculations: VecDeque::new(),
            capacity,
        }
    }

    /// Remembers a calculation, forgetting the oldest once full
    pub fn record(&mut self, calculation: Calculation) {
        if self.capacity == 0 {
            return;
        }
        while self.calculations.len() >= self.capacity {
            self.calculations.pop_front();
        }
        self.calculations.push_back(calculation);
    }

    /// Number of calculations kept
    #[must_use]
    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    /// True when nothing is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    /// Most calculations kept
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forgets everything
    pub fn clear(&mut self) {
        self.calculations.clear();
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Calculation> {
        self.calculations.iter()
    }
}
