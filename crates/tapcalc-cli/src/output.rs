//! Output formatting and the terminal display surface

use console::{style, Term};
use serde::{Deserialize, Serialize};
use tapcalc::core::history::Calculation;
use tapcalc::core::{Notice, Severity};
use tapcalc::engine::{Engine, Snapshot};
use tapcalc::session::Surface;
use tracing::warn;

/// Output format for the final result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Display text only
    #[default]
    Text,
    /// State, history and notices as JSON
    Json,
}

/// Everything a `run` produced, for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Final engine state
    pub state: Snapshot,
    /// Calculations performed, oldest first
    pub history: Vec<Calculation>,
    /// Notices raised, in order
    pub notices: Vec<NoticeReport>,
}

/// A notice with its rendered message
#[derive(Debug, Clone, Serialize)]
pub struct NoticeReport {
    /// warning or error
    pub severity: Severity,
    /// Message shown to the user
    pub message: String,
    /// Structured notice
    pub notice: Notice,
}

impl From<Notice> for NoticeReport {
    fn from(notice: Notice) -> Self {
        Self {
            severity: notice.severity(),
            message: notice.to_string(),
            notice,
        }
    }
}

impl RunReport {
    /// Collects the report from an engine and the notices it raised
    #[must_use]
    pub fn new(engine: &Engine, notices: Vec<Notice>) -> Self {
        Self {
            state: engine.snapshot(),
            history: engine.history().iter().cloned().collect(),
            notices: notices.into_iter().map(NoticeReport::from).collect(),
        }
    }
}

/// Renders a notice as one line
#[must_use]
pub fn format_notice(notice: &Notice, use_color: bool) -> String {
    let prefix = match (notice.severity(), use_color) {
        (Severity::Warning, true) => style("⚠").yellow().bold().to_string(),
        (Severity::Error, true) => style("✗").red().bold().to_string(),
        (Severity::Warning, false) => "WARN".to_string(),
        (Severity::Error, false) => "ERROR".to_string(),
    };
    format!("{prefix} {notice}")
}

/// Surface for line-oriented commands
///
/// Notices go to stderr as they happen. The display itself is written by
/// the command, which decides how much of it to print.
#[derive(Debug)]
pub struct TermSurface {
    err: Term,
    use_color: bool,
    quiet: bool,
}

impl TermSurface {
    /// Create a surface reporting on stderr
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }
}

impl Surface for TermSurface {
    fn show(&mut self, _display: &str) {}

    fn notify(&mut self, notice: &Notice) {
        // warnings are dropped in quiet mode, errors never are
        if self.quiet && !notice.is_error() {
            return;
        }
        if let Err(error) = self.err.write_line(&format_notice(notice, self.use_color)) {
            warn!(%error, "could not write notice");
        }
    }
}
