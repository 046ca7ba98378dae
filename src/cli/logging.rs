//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Pick the filter directive: explicit flag, then the environment, then the default
fn select_directive(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_string)
        .or(env.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// An unparsable directive falls back to [`DEFAULT_LOG_FILTER`].
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_logging(flag: Option<&str>) {
    let directive = select_directive(flag, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
