//! Calculator engine
//!
//! A left-to-right accumulator fed one key press at a time. All state lives
//! in [`Engine`]; [`Engine::submit`] is the only transition. Pressing an
//! operator while another is pending evaluates the pending one first, so
//! `2 + 3 * 4 =` gives 20, not 14.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::history::{Calculation, History};
use crate::core::number::{parse_number, round_to, DEFAULT_DECIMAL_PLACES};
use crate::core::{Clamp, Entry, MemoryRegister, Notice, Operator};
use crate::token::Token;

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Decimal places kept when rounding a result
    pub decimal_places: u32,
    /// Number of completed calculations remembered
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            history_capacity: History::DEFAULT_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets result precision
    #[must_use]
    pub const fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Sets history size
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

/// Serializable view of the engine state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Text on the display
    pub display: String,
    /// Operand being typed ("" when empty)
    pub current: String,
    /// Committed left-hand operand or last result ("" when empty)
    pub previous: String,
    /// Pending operator
    pub operator: Option<Operator>,
    /// Set right after `=` produced a result
    pub just_calculated: bool,
    /// Memory register value
    pub memory: f64,
}

/// Button-driven four-function calculator
#[derive(Debug, Clone)]
pub struct Engine {
    current: Entry,
    previous: Entry,
    operator: Option<Operator>,
    just_calculated: bool,
    memory: MemoryRegister,
    history: History,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with custom settings
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            current: Entry::new(),
            previous: Entry::new(),
            operator: None,
            just_calculated: false,
            memory: MemoryRegister::new(),
            history: History::with_capacity(config.history_capacity),
            config,
        }
    }

    /// Processes one key press
    ///
    /// Returns the notice the press raised, if any. Key presses that make
    /// no sense in the current state are ignored.
    pub fn submit(&mut self, token: Token) -> Option<Notice> {
        if self.just_calculated && token.is_append() {
            // a new number after `=` starts a new calculation
            self.reset_accumulator();
        }

        let notice = match token {
            Token::Digit(d) => {
                self.current.push_digit(d);
                self.just_calculated = false;
                None
            }
            Token::Decimal => {
                if self.current.push_decimal() {
                    self.just_calculated = false;
                }
                None
            }
            Token::Operator(op) => self.press_operator(op),
            Token::Equals => self.evaluate_pending(),
            Token::Clear => {
                self.reset_accumulator();
                None
            }
            Token::Backspace => {
                self.current.backspace();
                None
            }
            Token::MemoryStore => self
                .active_value()
                .and_then(|value| self.memory.store(value))
                .map(|clamp| self.clamped(clamp)),
            Token::MemoryRecall => {
                self.current = Entry::from_value(self.memory.value());
                self.just_calculated = false;
                None
            }
            Token::MemoryClear => {
                self.memory.clear();
                None
            }
            Token::MemoryAdd => self
                .active_value()
                .and_then(|value| self.memory.add(value))
                .map(|clamp| self.clamped(clamp)),
        };

        debug!(
            token = %token,
            display = %self.display(),
            operator = ?self.operator,
            just_calculated = self.just_calculated,
            "token processed"
        );
        notice
    }

    /// Submits a sequence, collecting every notice raised
    pub fn submit_all<I>(&mut self, tokens: I) -> Vec<Notice>
    where
        I: IntoIterator<Item = Token>,
    {
        tokens
            .into_iter()
            .filter_map(|token| self.submit(token))
            .collect()
    }

    /// Text on the display
    #[must_use]
    pub fn display(&self) -> String {
        self.current
            .shown()
            .or_else(|| self.previous.shown())
            .unwrap_or("0")
            .to_string()
    }

    /// Operand being typed
    #[must_use]
    pub const fn current(&self) -> &Entry {
        &self.current
    }

    /// Committed operand or last result
    #[must_use]
    pub const fn previous(&self) -> &Entry {
        &self.previous
    }

    /// Pending operator
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True right after `=` produced a result
    #[must_use]
    pub const fn just_calculated(&self) -> bool {
        self.just_calculated
    }

    /// Memory register value
    #[must_use]
    pub const fn memory(&self) -> f64 {
        self.memory.value()
    }

    /// Completed calculations
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Forgets completed calculations
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Active settings
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Serializable view of the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display(),
            current: self.current.as_str().unwrap_or_default().to_string(),
            previous: self.previous.as_str().unwrap_or_default().to_string(),
            operator: self.operator,
            just_calculated: self.just_calculated,
            memory: self.memory.value(),
        }
    }

    fn press_operator(&mut self, op: Operator) -> Option<Notice> {
        if self.current.is_empty() {
            if op == Operator::Subtract && self.current.push_sign() {
                // the sign belongs to a new operand, not to the shown result
                self.just_calculated = false;
            }
            return None;
        }
        if self.current.value().is_none() {
            // a lone "-" is not an operand yet
            return None;
        }

        if self.operator.is_some() && !self.previous.is_empty() {
            if let Some(notice) = self.evaluate_pending() {
                return Some(notice);
            }
        }

        self.operator = Some(op);
        self.previous = std::mem::take(&mut self.current);
        self.just_calculated = false;
        None
    }

    /// Applies the pending operator to the two operands
    ///
    /// Does nothing unless an operator is pending and both operands hold
    /// numbers. A failed operation clears the accumulator.
    fn evaluate_pending(&mut self) -> Option<Notice> {
        let (Some(op), Some(lhs), Some(rhs)) =
            (self.operator, self.previous.value(), self.current.value())
        else {
            return None;
        };

        match op.apply(lhs, rhs) {
            Ok(raw) => {
                let result = round_to(raw, self.config.decimal_places);
                let calculation = Calculation {
                    lhs: self.previous.as_str().unwrap_or_default().to_string(),
                    operator: op,
                    rhs: self.current.as_str().unwrap_or_default().to_string(),
                    result,
                };
                debug!(%calculation, "evaluated");
                self.history.record(calculation);

                self.current = Entry::from_value(result);
                self.previous = self.current.clone();
                self.operator = None;
                self.just_calculated = true;
                None
            }
            Err(error) => {
                info!(%error, lhs, rhs, operator = %op, "calculation failed, clearing");
                self.reset_accumulator();
                Some(Notice::from(error))
            }
        }
    }

    /// The number memory operations act on: the typed operand, or the
    /// display when nothing is being typed
    fn active_value(&self) -> Option<f64> {
        if self.current.is_empty() {
            parse_number(&self.display())
        } else {
            self.current.value()
        }
    }

    fn clamped(&self, clamp: Clamp) -> Notice {
        info!(?clamp, memory = self.memory.value(), "memory clamped");
        clamp.notice()
    }

    fn reset_accumulator(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operator = None;
        self.just_calculated = false;
    }
}
