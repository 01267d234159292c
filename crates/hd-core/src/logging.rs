//! Structured logging setup for the binary.
//!
//! Logs go to stderr so stdout carries only results. `HEREDITY_LOG` takes
//! an `EnvFilter` directive and overrides the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "HEREDITY_LOG";

/// Default filter for a `-v` count.
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // Already installed (tests, embedding) is fine.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
