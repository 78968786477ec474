//! Logging initialization for pyfirst.
//!
//! Diagnostics are the tool's output, so tracing stays quiet by default and
//! only speaks when `RUST_LOG` asks it to. Log lines always go to stderr to
//! keep stdout limited to undecodable-file notices.

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros are used.
pub fn init_tracing() -> Result<(), CliError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
