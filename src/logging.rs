//! Tracing subscriber setup for the command line drivers.

use tracing_subscriber::EnvFilter;

/// Installs a human-readable subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this more than once is a
/// no-op, so tests and binaries can both invoke it.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
