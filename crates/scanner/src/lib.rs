#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`ScanError`)
//! - [`config`]: Scanner configuration (`ScannerConfig`, builder, compiled-in defaults)
//! - [`registry`]: Known-header registry (`KnownHeaderRegistry`)
//! - [`pattern`]: Line classifiers (`IncludeMatcher`, `CommentTracker`)
//! - [`diagnostic`]: Reported events (`Diagnostic`, `DiagnosticSink`)
//! - [`scanner`]: Single-pass per-file scan (`OrderingScanner`)
//! - [`driver`]: Scan order and run summary (`check_files`, `CheckSummary`)
//! - [`metrics`]: Metric name constants
//!
//! # Architecture
//!
//! ```text
//! file paths --> scan_order (headers first) --> OrderingScanner::scan_file
//!                                                  |            |
//!                                        KnownHeaderRegistry   DiagnosticSink
//!                                          (grows per run)      (stderr/stdout)
//!                                                  |
//!                                            violation count --> CheckSummary --> exit status
//! ```

pub mod config;
pub mod diagnostic;
pub mod driver;
pub mod error;
pub mod metrics;
pub mod pattern;
pub mod registry;
pub mod scanner;

// --- Public API Re-exports ---

// Scanner
pub use scanner::OrderingScanner;

// Driver
pub use driver::{CheckSummary, check_files, scan_order};

// Configuration
pub use config::{ScannerConfig, ScannerConfigBuilder};

// Error
pub use error::ScanError;

// Diagnostics
pub use diagnostic::{Channel, Diagnostic, DiagnosticSink};

// Registry
pub use registry::KnownHeaderRegistry;
