//! Diagnostic logging to stderr
//!
//! Quiet by default. `-v` shows engine events, `-vv` every key press.
//! `RUST_LOG` takes precedence over the flags:
//!
//! ```bash
//! RUST_LOG=tapcalc=debug tapcalc run 5 + 3 =
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Verbosity;

static INIT: Once = Once::new();

/// Filter directive for a verbosity level
#[must_use]
pub const fn filter_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "warn,tapcalc=info,tapcalc_cli=info",
        Verbosity::Debug => "warn,tapcalc=debug,tapcalc_cli=debug",
    }
}

/// Installs the global subscriber; later calls are ignored
pub fn init(verbosity: Verbosity) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directive(verbosity))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter);

        // another subscriber may already be installed (tests)
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
