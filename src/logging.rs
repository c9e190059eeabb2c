//! Diagnostic logging via `tracing`
//!
//! Logs go to stderr so stdout stays reserved for the map. `DIRMAP_LOG`
//! takes any `EnvFilter` directive and overrides the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `dirmap=debug`.
pub const LOG_ENV: &str = "DIRMAP_LOG";

/// Map a `-v` count to a default level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: u8, use_color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(use_color)
        .with_writer(std::io::stderr)
        .try_init();
}
