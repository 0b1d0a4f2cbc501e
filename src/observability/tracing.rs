//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise the `-v` count picks the level.
//! Events go to stderr so reports on stdout stay machine readable.
//! `log` records are forwarded through the subscriber's `tracing-log` bridge.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity count.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}
