//! Tracing subscriber configuration.

use tracing_subscriber::EnvFilter;

/// Install a JSON-formatting subscriber filtered via `RUST_LOG`.
///
/// Defaults to `info` when no filter is set in the environment. Re-invoking
/// after a subscriber is installed is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
