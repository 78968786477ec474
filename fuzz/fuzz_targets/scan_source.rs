#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use pyfirst_scanner::{Diagnostic, OrderingScanner, ScannerConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut scanner) = OrderingScanner::new(ScannerConfig::default()) else {
        return;
    };

    let mut diags: Vec<Diagnostic> = Vec::new();
    let violations = scanner.scan_source(Path::new("fuzz.c"), src, &mut diags);

    // 위반이 있으면 순서 진단이 정확히 하나 보고된다
    let out_of_order = diags
        .iter()
        .filter(|d| matches!(d, Diagnostic::OutOfOrder { .. }))
        .count();
    assert!(out_of_order <= 1);
    if violations > 0 {
        assert_eq!(out_of_order, 1);
    }
});
