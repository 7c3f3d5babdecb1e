//! tapcalc: calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! tapcalc run 5 + 3 =             # Press keys, print the display
//! tapcalc run --trace 12+3=       # Display after every key
//! tapcalc run -f json 6 / 0 =     # JSON report with notices
//! tapcalc repl                    # One key sequence per line
//! tapcalc keys                    # Interactive keypad
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tapcalc::session::Session;
use tapcalc_cli::{
    interactive, logging, run_repl, run_sequence, Cli, CliConfig, CliResult, ColorChoice,
    Commands, ReplArgs, RunArgs, RunOptions, TermSurface, Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    logging::init(config.verbosity);
    tracing::debug!(?config, "starting");

    match cli.command {
        Commands::Run(args) => run_keys_once(&config, &args),
        Commands::Repl(args) => run_line_repl(&config, &args),
        Commands::Keys => interactive::run_keys(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_precision(cli.precision)
        .with_history_size(cli.history_size)
}

fn surface(config: &CliConfig) -> TermSurface {
    TermSurface::new(config.color.should_color(), config.verbosity.is_quiet())
}

fn run_keys_once(config: &CliConfig, args: &RunArgs) -> CliResult<()> {
    let mut session = Session::with_config(config.engine, surface(config));
    let options = RunOptions {
        trace: args.trace,
        format: args.format.into(),
    };
    let mut out = io::stdout().lock();
    run_sequence(&mut session, &args.sequence(), options, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_line_repl(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let mut session = Session::with_config(config.engine, surface(config));
    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let lines = run_repl(&mut session, stdin, &mut out, &mut err, args.prompt)?;
    tracing::info!(lines, "repl finished");
    Ok(())
}
