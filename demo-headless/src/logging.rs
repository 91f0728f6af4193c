//! Shared `tracing` setup for the demo binaries

use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only the tour output. `RUST_LOG` overrides the `warn`
/// default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
