#![no_main]

use std::path::PathBuf;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pyfirst_scanner::{Diagnostic, OrderingScanner, ScannerConfig, scan_order};

/// 가상의 파일 하나 (이름, 내용)
#[derive(Debug, Arbitrary)]
struct FuzzFile {
    name: String,
    content: String,
}

fuzz_target!(|files: Vec<FuzzFile>| {
    let Ok(mut scanner) = OrderingScanner::new(ScannerConfig::default()) else {
        return;
    };

    let paths: Vec<PathBuf> = files.iter().map(|f| PathBuf::from(&f.name)).collect();
    let ordered = scan_order(paths.as_slice());
    assert_eq!(ordered.len(), files.len());

    let mut before = scanner.registry().len();
    for path in ordered {
        let Some(idx) = paths.iter().position(|p| std::ptr::eq(p.as_path(), path)) else {
            continue;
        };
        let mut diags: Vec<Diagnostic> = Vec::new();
        let _ = scanner.scan_source(path, &files[idx].content, &mut diags);

        // 레지스트리는 줄어들지 않는다
        let after = scanner.registry().len();
        assert!(after >= before);
        before = after;
    }
});
