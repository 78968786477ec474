//! 드라이버 -- 파일 목록을 스캔 순서대로 검사하고 위반 수를 합산
//!
//! 헤더로 보이는 파일(경로에 `h`/`H` 포함)을 먼저 스캔해야, 지정 헤더를
//! 간접적으로 포함하는 헤더가 그 헤더를 include하는 소스 파일보다 먼저
//! 레지스트리에 등록됩니다.

use std::path::Path;

use tracing::{debug, warn};

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::ScanError;
use crate::metrics as m;
use crate::scanner::OrderingScanner;

/// 종료 코드 상한 (Unix 종료 상태는 8비트)
pub const MAX_EXIT_STATUS: i32 = 255;

/// 전체 검사 결과 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// 스캔을 마친 파일 수
    pub files_scanned: usize,
    /// 디코딩 실패로 건너뛴 파일 수
    pub files_skipped: usize,
    /// 파일별 위반 수의 합
    pub violations: usize,
}

impl CheckSummary {
    /// 위반이 없는지 반환합니다.
    pub fn is_clean(&self) -> bool {
        self.violations == 0
    }

    /// 프로세스 종료 코드를 반환합니다.
    ///
    /// 위반 수의 합이며, 큰 값이 0으로 되돌아가지 않도록 255에서 포화됩니다.
    pub fn exit_status(&self) -> i32 {
        i32::try_from(self.violations)
            .unwrap_or(MAX_EXIT_STATUS)
            .min(MAX_EXIT_STATUS)
    }
}

/// 경로가 헤더 파일일 가능성이 있는지 (대소문자 무시 `h` 포함)
pub fn is_probable_header(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .any(|c| c == 'h' || c == 'H')
}

/// 스캔 순서를 반환합니다.
///
/// 헤더로 보이는 파일을 앞에 두는 안정 분할이며, 각 그룹 안의 상대 순서는 유지됩니다.
pub fn scan_order<P: AsRef<Path>>(paths: &[P]) -> Vec<&Path> {
    let (headers, others): (Vec<&Path>, Vec<&Path>) = paths
        .iter()
        .map(AsRef::as_ref)
        .partition(|p| is_probable_header(p));
    headers.into_iter().chain(others).collect()
}

/// 파일 목록을 스캔 순서대로 검사합니다.
///
/// 디코딩 실패는 [`Diagnostic::NotUtf8`]로 보고하고 위반 0으로 집계합니다.
///
/// # Errors
///
/// 디코딩 실패 외의 에러(`ScanError::Io`)는 즉시 반환되어 실행을 중단합니다.
/// 이미 싱크로 보낸 진단은 그대로 남습니다.
pub fn check_files<P: AsRef<Path>>(
    scanner: &mut OrderingScanner,
    paths: &[P],
    sink: &mut dyn DiagnosticSink,
) -> Result<CheckSummary, ScanError> {
    let mut summary = CheckSummary::default();

    for path in scan_order(paths) {
        match scanner.scan_file(path, sink) {
            Ok(violations) => {
                summary.files_scanned += 1;
                summary.violations += violations;
            }
            Err(e) if e.is_recoverable() => {
                warn!(path = %path.display(), error = %e, "skipping file");
                metrics::counter!(m::DECODE_FAILURES_TOTAL).increment(1);
                sink.emit(Diagnostic::NotUtf8 {
                    path: path.display().to_string(),
                });
                summary.files_skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        files_scanned = summary.files_scanned,
        files_skipped = summary.files_skipped,
        violations = summary.violations,
        "check completed"
    );

    Ok(summary)
}
