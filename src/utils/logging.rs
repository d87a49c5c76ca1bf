//! Logging setup for the command-line tools.
//!
//! Diagnostics go to stderr so stdout carries only converted output.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
