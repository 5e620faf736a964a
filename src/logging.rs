use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Drill diagnostics already go to
/// stderr, so only errors from the program itself are logged alongside them.
pub fn default_filter() -> EnvFilter {
    EnvFilter::new("error")
}

/// Installs the global subscriber, writing to stderr.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter()))
        .with_writer(io::stderr)
        .init();
}
