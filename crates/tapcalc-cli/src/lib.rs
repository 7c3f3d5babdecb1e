//! tapcalc CLI library
//!
//! Command-line front end for the tapcalc engine: one-shot key runs, a
//! line REPL and a raw-mode interactive calculator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod interactive;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, Commands, FormatArg, ReplArgs, RunArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{format_notice, NoticeReport, OutputFormat, RunReport, TermSurface};
pub use runner::{run_repl, run_sequence, RunOptions};
