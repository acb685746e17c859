//! Diagnostic logging to stderr through `tracing`

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warn, info, debug, then trace
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the log filter, letting `RUST_LOG` override the verbosity flag
pub fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global stderr subscriber
///
/// Returns false if a subscriber was already installed, e.g. by a test
/// harness; logging then goes to that subscriber instead.
pub fn init_logging(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
