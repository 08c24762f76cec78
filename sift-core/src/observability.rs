//! Tracing setup for binaries and embedding hosts.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured output.
///
/// Respects the `SIFT_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
