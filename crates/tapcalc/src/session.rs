//! Engine plus display surface
//!
//! A [`Session`] feeds key presses to an [`Engine`] and, after each one,
//! writes the display to a [`Surface`] and forwards any notice. Front ends
//! implement [`Surface`]; tests use [`RecordingSurface`].

use crate::core::Notice;
use crate::engine::{Engine, EngineConfig};
use crate::token::Token;

/// Where the display and notifications are shown
pub trait Surface {
    /// Shows the display text; called once after every key press
    fn show(&mut self, display: &str);

    /// Presents a warning or error to the user
    fn notify(&mut self, notice: &Notice);
}

/// Surface that keeps everything it was sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    /// Every display frame, oldest first
    pub frames: Vec<String>,
    /// Every notice, oldest first
    pub notices: Vec<Notice>,
}

impl RecordingSurface {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame
    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Surface for RecordingSurface {
    fn show(&mut self, display: &str) {
        self.frames.push(display.to_string());
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(*notice);
    }
}

/// An engine wired to a surface
#[derive(Debug)]
pub struct Session<S> {
    engine: Engine,
    surface: S,
}

impl<S: Surface> Session<S> {
    /// Creates a session with a default engine
    pub fn new(surface: S) -> Self {
        Self::with_engine(Engine::new(), surface)
    }

    /// Creates a session with a configured engine
    pub fn with_config(config: EngineConfig, surface: S) -> Self {
        Self::with_engine(Engine::with_config(config), surface)
    }

    /// Wraps an existing engine
    pub const fn with_engine(engine: Engine, surface: S) -> Self {
        Self { engine, surface }
    }

    /// Writes the current display without pressing anything
    pub fn refresh(&mut self) {
        let display = self.engine.display();
        self.surface.show(&display);
    }

    /// Presses one key; notices reach the surface before the display
    pub fn press(&mut self, token: Token) -> Option<Notice> {
        let notice = self.engine.submit(token);
        if let Some(notice) = &notice {
            self.surface.notify(notice);
        }
        self.refresh();
        notice
    }

    /// Presses each key in turn, returning every notice raised
    pub fn press_all<I>(&mut self, tokens: I) -> Vec<Notice>
    where
        I: IntoIterator<Item = Token>,
    {
        tokens
            .into_iter()
            .filter_map(|token| self.press(token))
            .collect()
    }

    /// The engine
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The engine, mutably
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// The surface
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Splits the session back into its parts
    pub fn into_parts(self) -> (Engine, S) {
        (self.engine, self.surface)
    }
}
