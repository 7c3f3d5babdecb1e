//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ColorChoice;
use crate::output::OutputFormat;

/// tapcalc: button-driven calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress warnings)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", env = "TAPCALC_COLOR", global = true)]
    pub color: ColorArg,

    /// Decimal places kept in results (0-15)
    #[arg(
        long,
        default_value = "10",
        env = "TAPCALC_PRECISION",
        value_parser = clap::value_parser!(u32).range(0..=15),
        global = true
    )]
    pub precision: u32,

    /// Number of calculations remembered
    #[arg(long, default_value = "100", global = true)]
    pub history_size: usize,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys and print the display
    ///
    /// Keys are digits, `.`, `+ - * /`, `=`, and the words
    /// `c`, `bs`, `ms`, `mr`, `mc`, `m+`. Adjacent symbols may be
    /// written together: `tapcalc run 12+3=`.
    Run(RunArgs),

    /// Read key sequences line by line from stdin
    Repl(ReplArgs),

    /// Interactive calculator driven by single key presses
    Keys,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,

    /// Keys to press, in order
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "KEYS"
    )]
    pub keys: Vec<String>,
}

impl RunArgs {
    /// All keys as one sequence
    #[must_use]
    pub fn sequence(&self) -> String {
        self.keys.join(" ")
    }
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Print a prompt before each line
    #[arg(long)]
    pub prompt: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Display text
    #[default]
    Text,
    /// JSON report
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_run_command() {
            let cli = Cli::parse_from(["tapcalc", "run", "5", "+", "3", "="]);
            if let Commands::Run(args) = cli.command {
                assert_eq!(args.keys, vec!["5", "+", "3", "="]);
                assert_eq!(args.sequence(), "5 + 3 =");
                assert!(!args.trace);
                assert_eq!(args.format, FormatArg::Text);
            } else {
                panic!("expected Run command");
            }
        }

        #[test]
        fn test_parse_run_keeps_minus_key() {
            let cli = Cli::parse_from(["tapcalc", "run", "-", "5", "*", "2", "="]);
            if let Commands::Run(args) = cli.command {
                assert_eq!(args.keys[0], "-");
            } else {
                panic!("expected Run command");
            }
        }

        #[test]
        fn test_parse_run_with_options() {
            let cli = Cli::parse_from(["tapcalc", "run", "--trace", "-f", "json", "1+1="]);
            if let Commands::Run(args) = cli.command {
                assert!(args.trace);
                assert_eq!(args.format, FormatArg::Json);
                assert_eq!(args.keys, vec!["1+1="]);
            } else {
                panic!("expected Run command");
            }
        }

        #[test]
        fn test_run_requires_keys() {
            assert!(Cli::try_parse_from(["tapcalc", "run"]).is_err());
        }

        #[test]
        fn test_parse_repl_command() {
            let cli = Cli::parse_from(["tapcalc", "repl", "--prompt"]);
            if let Commands::Repl(args) = cli.command {
                assert!(args.prompt);
            } else {
                panic!("expected Repl command");
            }
        }

        #[test]
        fn test_parse_keys_command() {
            let cli = Cli::parse_from(["tapcalc", "keys"]);
            assert!(matches!(cli.command, Commands::Keys));
        }

        #[test]
        fn test_subcommand_required() {
            assert!(Cli::try_parse_from(["tapcalc"]).is_err());
        }
    }

    mod global_flag_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let cli = Cli::parse_from(["tapcalc", "keys"]);
            assert_eq!(cli.verbose, 0);
            assert!(!cli.quiet);
            assert!(matches!(cli.color, ColorArg::Auto));
            assert_eq!(cli.precision, 10);
            assert_eq!(cli.history_size, 100);
        }

        #[test]
        fn test_verbose_count() {
            let cli = Cli::parse_from(["tapcalc", "-vv", "keys"]);
            assert_eq!(cli.verbose, 2);
        }

        #[test]
        fn test_flags_after_subcommand() {
            let cli = Cli::parse_from(["tapcalc", "repl", "--quiet", "--precision", "4"]);
            assert!(cli.quiet);
            assert_eq!(cli.precision, 4);
        }

        #[test]
        fn test_precision_out_of_range() {
            assert!(Cli::try_parse_from(["tapcalc", "--precision", "16", "keys"]).is_err());
        }

        #[test]
        fn test_color_never() {
            let cli = Cli::parse_from(["tapcalc", "--color", "never", "keys"]);
            assert!(matches!(cli.color, ColorArg::Never));
        }
    }

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_color_arg_conversion() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_format_arg_conversion() {
            assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
            assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        }
    }
}
