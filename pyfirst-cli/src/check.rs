//! Check handler: builds the scanner and runs it over the given files.

use tracing::{debug, info};

use pyfirst_scanner::{CheckSummary, DiagnosticSink, OrderingScanner, ScannerConfig, check_files};

use crate::cli::Cli;
use crate::error::CliError;

/// Execute the check over `cli.files`, reporting diagnostics to `sink`.
pub fn execute(cli: &Cli, sink: &mut dyn DiagnosticSink) -> Result<CheckSummary, CliError> {
    let mut scanner = OrderingScanner::new(ScannerConfig::default())?;

    info!(files = cli.files.len(), "checking include order");

    let summary = check_files(&mut scanner, cli.files.as_slice(), sink)?;

    info!(
        files_scanned = summary.files_scanned,
        files_skipped = summary.files_skipped,
        violations = summary.violations,
        registry_size = scanner.registry().len(),
        "check finished"
    );
    debug!(registry = ?scanner.registry().sorted(), "known headers after run");

    Ok(summary)
}
