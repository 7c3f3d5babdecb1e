//! Line-oriented command implementations
//!
//! Both commands drive a [`Session`] and write results to a caller-supplied
//! writer, so they run the same against a terminal or a buffer.

use std::io::{BufRead, Write};

use tapcalc::core::Notice;
use tapcalc::session::{Session, Surface};
use tapcalc::token::parse_tokens;
use tracing::{debug, info};

use crate::error::CliResult;
use crate::output::{OutputFormat, RunReport};

/// Options for a one-shot run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the display after every key (text output only)
    pub trace: bool,
    /// Final output format
    pub format: OutputFormat,
}

/// Presses a key sequence and writes the result
///
/// The whole sequence is parsed before any key is pressed, so a typo leaves
/// the engine untouched. Returns the notices raised along the way.
pub fn run_sequence<S, W>(
    session: &mut Session<S>,
    sequence: &str,
    options: RunOptions,
    out: &mut W,
) -> CliResult<Vec<Notice>>
where
    S: Surface,
    W: Write,
{
    let tokens = parse_tokens(sequence)?;
    info!(keys = tokens.len(), "running key sequence");

    let mut notices = Vec::new();
    for token in tokens {
        notices.extend(session.press(token));
        if options.trace && options.format == OutputFormat::Text {
            writeln!(out, "{:<3} {}", token.label(), session.engine().display())?;
        }
    }

    match options.format {
        OutputFormat::Text => {
            if !options.trace {
                writeln!(out, "{}", session.engine().display())?;
            }
        }
        OutputFormat::Json => {
            let report = RunReport::new(session.engine(), notices.clone());
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(notices)
}

/// A line the REPL treats as a command rather than keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplCommand {
    History,
    Quit,
}

impl ReplCommand {
    fn parse(line: &str) -> Option<Self> {
        match line.to_ascii_lowercase().as_str() {
            "history" => Some(Self::History),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Reads key sequences from `input`, one per line
///
/// After each line the display is written to `out`. Lines that fail to
/// parse are reported on `err` and skipped; the session carries on.
/// Returns the number of key lines processed.
pub fn run_repl<S, R, W, E>(
    session: &mut Session<S>,
    input: R,
    out: &mut W,
    err: &mut E,
    prompt: bool,
) -> CliResult<usize>
where
    S: Surface,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut processed = 0;
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match ReplCommand::parse(line) {
            Some(ReplCommand::Quit) => break,
            Some(ReplCommand::History) => {
                let history = session.engine().history();
                if history.is_empty() {
                    writeln!(out, "(no history)")?;
                }
                for calculation in history.iter() {
                    writeln!(out, "{calculation}")?;
                }
            }
            None => match parse_tokens(line) {
                Ok(tokens) => {
                    session.press_all(tokens);
                    writeln!(out, "{}", session.engine().display())?;
                    processed += 1;
                }
                Err(e) => {
                    debug!(line, "rejected line");
                    writeln!(err, "Error: {e}")?;
                }
            },
        }
    }

    Ok(processed)
}
