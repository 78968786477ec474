//! CLI-specific error types and exit code mapping

use pyfirst_scanner::ScanError;

/// CLI-specific error type.
///
/// Only errors that abort the whole run end up here. Ordering violations are
/// not errors; they are reported through the exit status of a successful run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Scanner error that stopped the run (unreadable file, bad configuration).
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                     |
    /// |------|-----------------------------|
    /// | 1    | General error               |
    /// | 2    | Configuration error         |
    /// | 10   | IO error                    |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Scan(ScanError::Config { .. }) => 2,
            Self::Scan(ScanError::Io { .. }) => 10,
            Self::Scan(ScanError::Decode { .. }) | Self::Logging(_) => 1,
        }
    }
}
