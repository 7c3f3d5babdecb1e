//! tapcalc - a button-driven four-function calculator
//!
//! The engine takes one key press at a time (digits, decimal point, the
//! four operators, equals, clear, backspace and the memory keys) and keeps
//! a display string up to date. Operators chain left to right without
//! precedence, results are rounded to ten decimal places, and a single
//! memory register is clamped to the exact-integer range of an `f64`.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.submit_all(parse_tokens("0.1 + 0.2 =").unwrap());
//! assert_eq!(engine.display(), "0.3");
//!
//! // chaining evaluates as it goes
//! engine.submit_all(parse_tokens("* 10 =").unwrap());
//! assert_eq!(engine.display(), "3");
//!
//! // division by zero clears everything and reports why
//! let notices = engine.submit_all(parse_tokens("6 / 0 =").unwrap());
//! assert_eq!(notices, vec![Notice::from(CalcError::DivisionByZero)]);
//! assert_eq!(engine.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod engine;
pub mod session;
pub mod token;

#[cfg(feature = "keys")]
pub mod keys;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::{Calculation, History};
    pub use crate::core::{
        CalcError, CalcResult, Entry, MemoryRegister, Notice, Operator, Severity,
        MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
    };
    pub use crate::engine::{Engine, EngineConfig, Snapshot};
    pub use crate::session::{RecordingSurface, Session, Surface};
    pub use crate::token::{parse_tokens, Token, TokenError};

    #[cfg(feature = "keys")]
    pub use crate::keys::{KeyAction, KeyMap};
}
