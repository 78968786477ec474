//! Integration tests for the `pyfirst` binary.
//!
//! Runs the built executable against temp files and checks the exit status
//! and which stream each diagnostic lands on.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn pyfirst<P: AsRef<OsStr>>(args: &[P]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pyfirst"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("should run pyfirst")
}

fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("should write fixture");
    path
}

#[test]
fn test_clean_file_exits_zero() {
    // Given: Python.h included first
    let dir = TempDir::new().expect("should create temp dir");
    let file = write(&dir, "mod.c", b"#include \"Python.h\"\n#include <stdio.h>\n");

    // When: Running the check
    let output = pyfirst(&[&file]);

    // Then: Success with no output
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_out_of_order_exits_with_count() {
    // Given: a standard header before Python.h
    let dir = TempDir::new().expect("should create temp dir");
    let file = write(&dir, "c.c", b"#include <stdio.h>\n#include \"Python.h\"\n");

    // When: Running the check
    let output = pyfirst(&[&file]);

    // Then: Exit status is the violation count and the diagnostic is on stderr
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Header before Python.h in file"));
    assert!(stderr.contains("Python.h on line 2, other header(s) on line(s) [1]"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_violations_sum_across_files() {
    let dir = TempDir::new().expect("should create temp dir");
    let one = write(&dir, "one.c", b"#include <stdio.h>\n#include <Python.h>\n");
    let two = write(
        &dir,
        "two.c",
        b"#include <stdio.h>\n#include <stdlib.h>\n#include <Python.h>\n",
    );

    let output = pyfirst(&[&one, &two]);

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_header_registered_for_later_source() {
    // Given: a header including Python.h and a source including that header
    let dir = TempDir::new().expect("should create temp dir");
    let source = write(&dir, "b.c", b"#include \"a.h\"\nstatic npy_intp n;\n");
    let header = write(&dir, "a.h", b"#include \"Python.h\"\n#include <stdio.h>\n");

    // When: Running the check (header listed first, since the temp path may contain an h)
    let output = pyfirst(&[&header, &source]);

    // Then: No diagnostics
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_construct_warning_does_not_fail() {
    let dir = TempDir::new().expect("should create temp dir");
    let file = write(&dir, "ext.cpp", b"PYBIND11_MODULE(ext, m) {}\npy::object o;\n");

    let output = pyfirst(&[&file]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Construct on line").count(), 1);
    assert!(stderr.contains("Construct on line 1"));
}

#[test]
fn test_non_utf8_reported_on_stdout() {
    let dir = TempDir::new().expect("should create temp dir");
    let file = write(&dir, "latin1.c", b"/* caf\xe9 */\n#include <stdio.h>\n");

    let output = pyfirst(&[&file]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), format!("File {} not utf-8", file.display()));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_missing_file_aborts() {
    let dir = TempDir::new().expect("should create temp dir");
    let missing = dir.path().join("missing.c");

    let output = pyfirst(&[&missing]);

    assert_eq!(output.status.code(), Some(10));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.c"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = pyfirst::<&Path>(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!output.stderr.is_empty());
}
