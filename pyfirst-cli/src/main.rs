//! pyfirst -- checks that Python.h is included before any other header.
//!
//! The exit status is the number of out-of-order header lines found across
//! all files (capped at 255), so a build system can fail on any nonzero value.

mod check;
mod cli;
mod error;
mod logging;
mod output;

use clap::Parser;

use crate::cli::Cli;
use crate::output::ConsoleSink;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing() {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }

    let mut sink = ConsoleSink::stdio();
    let result = check::execute(&cli, &mut sink);

    if let Err(e) = sink.flush() {
        tracing::warn!(error = %e, "failed to flush output");
    }

    let code = match result {
        Ok(summary) => summary.exit_status(),
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    };

    tracing::debug!(code, "exiting");
    std::process::exit(code);
}
