//! Tracing initialization for binaries and tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Filter resolution: `RUST_LOG` when set, `default_directive` otherwise.
/// Safe to call more than once — later calls are no-ops.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// Install the global subscriber with the workspace default filter.
pub fn init_default() {
    init("diffgauge=info");
}
