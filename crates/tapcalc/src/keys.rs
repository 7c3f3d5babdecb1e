//! Keyboard mapping for terminal front ends

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::token::Token;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator key
    Submit(Token),
    /// Leave the calculator
    Quit,
    /// Key has no meaning here
    None,
}

/// Maps terminal key events to calculator actions
///
/// Memory keys: `s` store, `r` recall, `m` clear, `p` add.
#[derive(Debug, Default)]
pub struct KeyMap;

impl KeyMap {
    /// Creates the default key map
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Submit(Token::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Enter => KeyAction::Submit(Token::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Submit(Token::Backspace),
            KeyCode::Esc => KeyAction::Submit(Token::Clear),
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('s') => KeyAction::Submit(Token::MemoryStore),
            KeyCode::Char('r') => KeyAction::Submit(Token::MemoryRecall),
            KeyCode::Char('m') => KeyAction::Submit(Token::MemoryClear),
            KeyCode::Char('p') => KeyAction::Submit(Token::MemoryAdd),
            KeyCode::Char(c) => Token::from_char(c).map_or(KeyAction::None, KeyAction::Submit),
            _ => KeyAction::None,
        }
    }
}
