//! Diagnostic logging to stderr
//!
//! stdout carries the prompt itself, so every log line goes to stderr and the
//! default filter only lets warnings through.

use tracing_subscriber::EnvFilter;

use super::config::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

/// Builds the filter from `PROMPTLINE_LOG`, falling back to `warn`
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
