//! CLI argument parsing using clap derive API
//!
//! Purely declarative: file paths are the only input. The checked headers
//! and markers are compiled into the scanner.

use std::path::PathBuf;

use clap::Parser;

/// Check that Python.h is included before any other header.
///
/// Exits with the total number of header lines found before Python.h,
/// summed over all files and capped at 255 (0 when clean).
#[derive(Parser, Debug)]
#[command(name = "pyfirst")]
pub struct Cli {
    /// C/C++ source and header files to check.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
