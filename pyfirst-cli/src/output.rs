//! Console output for diagnostics
//!
//! All diagnostics flow through [`ConsoleSink`], which routes each one to the
//! stream it belongs on: ordering diagnostics to stderr, undecodable-file
//! notices to stdout.

use std::io::{Stderr, Stdout, Write};

use tracing::warn;

use pyfirst_scanner::{Channel, Diagnostic, DiagnosticSink};

/// Diagnostic sink writing human-readable lines to two streams.
pub struct ConsoleSink<E, O> {
    err: E,
    out: O,
}

impl ConsoleSink<Stderr, Stdout> {
    /// Sink bound to the process stderr/stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stderr(), std::io::stdout())
    }
}

impl<E: Write, O: Write> ConsoleSink<E, O> {
    /// Create a sink over arbitrary writers.
    pub fn new(err: E, out: O) -> Self {
        Self { err, out }
    }

    /// Flush both streams.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// Consume the sink, returning `(err, out)`.
    #[cfg(test)]
    pub fn into_inner(self) -> (E, O) {
        (self.err, self.out)
    }
}

impl<E: Write, O: Write> DiagnosticSink for ConsoleSink<E, O> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let written = match diagnostic.channel() {
            Channel::Stderr => writeln!(self.err, "{diagnostic}"),
            Channel::Stdout => writeln!(self.out, "{diagnostic}"),
        };
        if let Err(e) = written {
            warn!(path = %diagnostic.path(), error = %e, "failed to write diagnostic");
        }
    }
}
