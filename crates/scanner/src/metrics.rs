//! 메트릭 이름 상수
//!
//! 스캐너가 `metrics::counter!()`, `metrics::gauge!()` 매크로로 기록하는
//! 메트릭 이름을 한 곳에서 정의합니다. 레코더가 설치되지 않으면 기록은 무시됩니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `pyfirst_`
//! - 접미어: `_total` (counter), 없음 (gauge)

/// 진단 종류 레이블 키 (out_of_order, secondary_before_designated, ...)
pub const LABEL_KIND: &str = "kind";

/// 스캔한 파일 수 (counter)
pub const FILES_SCANNED_TOTAL: &str = "pyfirst_files_scanned_total";

/// UTF-8 디코딩 실패로 건너뛴 파일 수 (counter)
pub const DECODE_FAILURES_TOTAL: &str = "pyfirst_decode_failures_total";

/// 파일별 위반 수의 누적 합 (counter)
pub const VIOLATIONS_TOTAL: &str = "pyfirst_violations_total";

/// 보고된 진단 수 (counter, label: kind)
pub const DIAGNOSTICS_TOTAL: &str = "pyfirst_diagnostics_total";

/// 레지스트리에 등록된 헤더 수 (gauge)
pub const REGISTRY_SIZE: &str = "pyfirst_registry_size";
