//! Diagnostic logging setup.
//!
//! Library code only emits `tracing` events. Binaries and demos call [`init`]
//! once to print them to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber.
///
/// Reads `RUST_LOG`; falls back to `default_filter` when it is unset or
/// invalid. Calling this again after a subscriber is installed does nothing.
///
/// ```bash
/// RUST_LOG=pathcast=trace cargo run --example events
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
