//! 스캐너 에러 타입
//!
//! [`ScanError`]는 파일 스캔과 설정 검증 중 발생할 수 있는 에러를 나타냅니다.
//!
//! # 에러 카테고리
//!
//! - **디코딩**: `Decode` -- 드라이버가 보고 후 건너뜀 (위반 0으로 집계)
//! - **파일 I/O**: `Io` -- 환경 문제이므로 전체 실행을 중단
//! - **설정**: `Config`

/// 스캐너 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// 파일이 UTF-8 텍스트가 아님
    #[error("file is not valid utf-8: {path}")]
    Decode {
        /// 대상 파일 경로
        path: String,
    },

    /// 파일 I/O 에러
    #[error("io error: {path}: {source}")]
    Io {
        /// 관련 파일 경로
        path: String,
        /// 원본 I/O 에러
        source: std::io::Error,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },
}

impl ScanError {
    /// 건너뛰고 계속 진행할 수 있는 에러인지 반환합니다.
    ///
    /// 디코딩 실패만 파일 내용의 속성이며, 나머지는 실행 환경 문제입니다.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
