//! Raw-mode interactive calculator
//!
//! One key press, one token. The display is redrawn in place on a single
//! line; notices are printed above it.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use tapcalc::core::Notice;
use tapcalc::keys::{KeyAction, KeyMap};
use tapcalc::session::{Session, Surface};
use tracing::{debug, warn};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::format_notice;

const HELP: &str = "keys: 0-9 . + - * / = | Enter = | Backspace | Esc clear | s/r/m/p memory | q quit";

/// Surface that redraws one terminal line
#[derive(Debug)]
pub struct LineSurface<W: Write> {
    out: W,
    use_color: bool,
    quiet: bool,
}

impl<W: Write> LineSurface<W> {
    /// Wraps a writer
    pub const fn new(out: W, use_color: bool, quiet: bool) -> Self {
        Self {
            out,
            use_color,
            quiet,
        }
    }

    /// Releases the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }
}

impl<W: Write> Surface for LineSurface<W> {
    fn show(&mut self, display: &str) {
        if let Err(error) = self.draw(display) {
            warn!(%error, "could not redraw display");
        }
    }

    fn notify(&mut self, notice: &Notice) {
        if self.quiet && !notice.is_error() {
            return;
        }
        // raw mode: explicit carriage returns
        let line = format!("{}\r\n", format_notice(notice, self.use_color));
        if let Err(error) = self.draw(&line) {
            warn!(%error, "could not write notice");
        }
    }
}

/// Feeds terminal events to a session until quit or end of input
///
/// Returns the number of keys that reached the engine.
pub fn drive<S, I>(session: &mut Session<S>, keymap: &KeyMap, events: I) -> CliResult<usize>
where
    S: Surface,
    I: IntoIterator<Item = io::Result<Event>>,
{
    let mut pressed = 0;
    session.refresh();

    for event in events {
        let Event::Key(key) = event? else {
            continue;
        };
        match keymap.handle_key(key) {
            KeyAction::Submit(token) => {
                session.press(token);
                pressed += 1;
            }
            KeyAction::Quit => break,
            KeyAction::None => debug!(?key, "unmapped key"),
        }
    }

    Ok(pressed)
}

/// Runs the interactive calculator on the terminal
pub fn run_keys(config: &CliConfig) -> CliResult<()> {
    let mut stdout = io::stdout();
    if !config.verbosity.is_quiet() {
        writeln!(stdout, "{HELP}")?;
    }

    terminal::enable_raw_mode()?;
    let surface = LineSurface::new(
        io::stdout(),
        config.color.should_color(),
        config.verbosity.is_quiet(),
    );
    let mut session = Session::with_config(config.engine, surface);
    let result = drive(
        &mut session,
        &KeyMap::new(),
        std::iter::from_fn(|| Some(event::read())),
    );

    // restore the terminal even when the loop failed
    terminal::disable_raw_mode()?;
    execute!(stdout, Print("\r\n"))?;

    let pressed = result?;
    debug!(pressed, "interactive session ended");
    Ok(())
}
