//! Property-based tests for the engine
//!
//! Random key sequences must never break the state invariants.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use proptest::prelude::*;
use tapcalc::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        4 => digit_strategy().prop_map(Token::Digit),
        1 => Just(Token::Decimal),
        2 => operator_strategy().prop_map(Token::Operator),
        1 => Just(Token::Equals),
        1 => Just(Token::Clear),
        1 => Just(Token::Backspace),
        1 => Just(Token::MemoryStore),
        1 => Just(Token::MemoryRecall),
        1 => Just(Token::MemoryClear),
        1 => Just(Token::MemoryAdd),
    ]
}

// ===== Typing =====

proptest! {
    /// Digits typed into a fresh engine concatenate exactly
    #[test]
    fn prop_digits_concatenate(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let mut engine = Engine::new();
        engine.submit_all(digits.iter().map(|d| Token::Digit(*d)));
        let expected: String = digits.iter().map(u8::to_string).collect();
        prop_assert_eq!(engine.current().as_str(), Some(expected.as_str()));
        prop_assert_eq!(engine.display(), expected);
    }

    /// A second decimal point leaves the state untouched
    #[test]
    fn prop_second_decimal_is_noop(
        before in prop::collection::vec(digit_strategy(), 0..6),
        after in prop::collection::vec(digit_strategy(), 0..6),
    ) {
        let mut engine = Engine::new();
        engine.submit_all(before.iter().map(|d| Token::Digit(*d)));
        engine.submit(Token::Decimal);
        engine.submit_all(after.iter().map(|d| Token::Digit(*d)));

        let snapshot = engine.snapshot();
        prop_assert_eq!(engine.submit(Token::Decimal), None);
        prop_assert_eq!(engine.snapshot(), snapshot);
    }
}

// ===== Invariants over arbitrary sequences =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_invariants_hold(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut engine = Engine::new();
        for token in tokens {
            engine.submit(token);

            // operator only with a left operand
            if engine.operator().is_some() {
                prop_assert!(!engine.previous().is_empty());
            }

            // at most one decimal point being typed
            let dots = engine.current().as_str().map_or(0, |s| s.matches('.').count());
            prop_assert!(dots <= 1);

            // memory stays in the safe range
            prop_assert!(engine.memory() >= MIN_SAFE_INTEGER);
            prop_assert!(engine.memory() <= MAX_SAFE_INTEGER);

            // display is never blank
            prop_assert!(!engine.display().is_empty());
        }
    }

    #[test]
    fn prop_clear_always_shows_zero(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut engine = Engine::new();
        engine.submit_all(tokens);
        let memory = engine.memory();
        engine.submit(Token::Clear);
        prop_assert_eq!(engine.display(), "0");
        prop_assert_eq!(engine.operator(), None);
        prop_assert_eq!(engine.memory(), memory);
    }
}

// ===== Arithmetic =====

proptest! {
    #[test]
    fn prop_integer_addition(a in 0u32..100_000, b in 0u32..100_000) {
        let mut engine = Engine::new();
        engine.submit_all(parse_tokens(&format!("{a}+{b}=")).unwrap());
        prop_assert_eq!(engine.display(), (u64::from(a) + u64::from(b)).to_string());
    }

    #[test]
    fn prop_division_by_zero_always_resets(a in 0u32..1_000_000) {
        let mut engine = Engine::new();
        let notices = engine.submit_all(parse_tokens(&format!("{a}/0=")).unwrap());
        prop_assert_eq!(notices, vec![Notice::from(CalcError::DivisionByZero)]);
        prop_assert_eq!(engine.display(), "0");
    }

    /// Memory store then add matches plain addition while in range
    #[test]
    fn prop_memory_accumulates(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let mut engine = Engine::new();
        let notices = engine.submit_all(parse_tokens(&format!("{a} ms c {b} m+")).unwrap());
        prop_assert!(notices.is_empty());
        prop_assert_eq!(engine.memory(), f64::from(a) + f64::from(b));
    }
}
