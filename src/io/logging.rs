//! Logging setup for the command-line tool
//!
//! Library code emits `tracing` events; only the binary installs a subscriber.
//! Output goes to stderr so stdout stays free for printed orderings.

use crate::io::configuration::DEFAULT_LOG_FILTER;
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive for a `-v` count
///
/// `RUST_LOG`, when set, takes precedence over this.
pub const fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter from `RUST_LOG`, falling back to the verbosity level
pub fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)))
}

/// Install the global subscriber
///
/// Returns false if a subscriber was already installed, in which case the
/// existing one is kept.
pub fn init_logging(verbosity: u8) -> bool {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(stderr_layer)
        .try_init()
        .is_ok()
}
