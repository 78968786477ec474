//! 스캐너 설정
//!
//! [`ScannerConfig`]는 지정 헤더 이름, 사전 등록 헤더 목록, 보조 생태계 마커,
//! 구문 마커 등 검사 규칙을 담습니다. 기본값은 컴파일 시점 상수이며
//! CLI는 항상 기본값을 사용합니다. 외부 설정 파일은 읽지 않습니다.
//!
//! # 사용 예시
//!
//! ```
//! use pyfirst_scanner::ScannerConfig;
//!
//! // 기본값으로 생성
//! let config = ScannerConfig::default();
//! config.validate().unwrap();
//!
//! // 빌더로 생성
//! use pyfirst_scanner::ScannerConfigBuilder;
//!
//! let config = ScannerConfigBuilder::new()
//!     .known_header("my_module.h")
//!     .build()
//!     .unwrap();
//! assert!(config.known_headers.iter().any(|h| h == "my_module.h"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// 모든 include보다 먼저 와야 하는 헤더
pub const DEFAULT_DESIGNATED_HEADER: &str = "Python.h";

/// `Python.h`를 (직접 또는 간접적으로) 포함한다고 알려진 헤더 목록
pub const DEFAULT_KNOWN_HEADERS: &[&str] = &[
    "Python.h",
    "numpy/arrayobject.h",
    "numpy/ndarrayobject.h",
    "numpy/npy_common.h",
    "numpy/npy_math.h",
    "numpy/random/distributions.h",
    "pybind11/pybind11.h",
    // 정렬 순서상 먼저 스캔되지 않는 헤더
    "ni_support.h",
];

/// 보조 생태계 헤더를 식별하는 부분 문자열
pub const DEFAULT_SECONDARY_MARKER: &str = "numpy";

/// 보조 생태계 검사에서 제외되는 유틸리티 헤더
pub const DEFAULT_SECONDARY_EXEMPT: &[&str] = &["numpy/utils.h"];

/// 지정 헤더가 필요한 구문의 부분 문자열
pub const DEFAULT_CONSTRUCT_MARKERS: &[&str] = &["py::", "PYBIND11_", "npy_"];

/// include 순서 검사 설정
///
/// # 필드
///
/// - **designated_header**: 가장 먼저 include되어야 하는 헤더
/// - **known_headers**: 지정 헤더를 포함한다고 알려진 헤더 (레지스트리 초기값)
/// - **secondary_marker**: 보조 생태계 헤더 경로에 포함된 부분 문자열
/// - **secondary_exempt**: 보조 생태계 검사에서 제외되는 경로
/// - **construct_markers**: 지정 헤더가 필요한 구문 마커
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// 가장 먼저 include되어야 하는 헤더
    pub designated_header: String,
    /// 지정 헤더를 포함한다고 알려진 헤더 목록
    pub known_headers: Vec<String>,
    /// 보조 생태계 마커
    pub secondary_marker: String,
    /// 보조 생태계 검사 예외 경로
    pub secondary_exempt: Vec<String>,
    /// 구문 마커
    pub construct_markers: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            designated_header: DEFAULT_DESIGNATED_HEADER.to_owned(),
            known_headers: to_owned_list(DEFAULT_KNOWN_HEADERS),
            secondary_marker: DEFAULT_SECONDARY_MARKER.to_owned(),
            secondary_exempt: to_owned_list(DEFAULT_SECONDARY_EXEMPT),
            construct_markers: to_owned_list(DEFAULT_CONSTRUCT_MARKERS),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl ScannerConfig {
    /// 설정 값의 유효성을 검증합니다.
    ///
    /// # 검증 규칙
    ///
    /// - `designated_header`: 비어있으면 안 되며 `known_headers`에 포함되어야 함
    /// - `known_headers`: 빈 항목 불가
    /// - `secondary_marker`: 비어있으면 안 됨
    /// - `construct_markers`: 공백뿐인 마커 불가 (모든 줄에 매칭됨)
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.designated_header.trim().is_empty() {
            return Err(ScanError::Config {
                field: "designated_header".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }

        if self.known_headers.iter().any(|h| h.trim().is_empty()) {
            return Err(ScanError::Config {
                field: "known_headers".to_owned(),
                reason: "header names must not be empty".to_owned(),
            });
        }

        if !self.known_headers.contains(&self.designated_header) {
            return Err(ScanError::Config {
                field: "known_headers".to_owned(),
                reason: format!("must contain designated header '{}'", self.designated_header),
            });
        }

        if self.secondary_marker.is_empty() {
            return Err(ScanError::Config {
                field: "secondary_marker".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }

        if self.construct_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ScanError::Config {
                field: "construct_markers".to_owned(),
                reason: "markers must not be blank".to_owned(),
            });
        }

        Ok(())
    }
}

/// [`ScannerConfig`] 빌더
///
/// 기본값에서 출발하여 항목을 추가/교체하고, 빌드 시 유효성을 검증합니다.
#[derive(Default)]
pub struct ScannerConfigBuilder {
    config: ScannerConfig,
}

impl ScannerConfigBuilder {
    /// 기본값을 가진 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 지정 헤더를 설정합니다.
    pub fn designated_header(mut self, header: impl Into<String>) -> Self {
        self.config.designated_header = header.into();
        self
    }

    /// 사전 등록 헤더 목록을 교체합니다.
    pub fn known_headers(mut self, headers: Vec<String>) -> Self {
        self.config.known_headers = headers;
        self
    }

    /// 사전 등록 헤더를 하나 추가합니다.
    pub fn known_header(mut self, header: impl Into<String>) -> Self {
        self.config.known_headers.push(header.into());
        self
    }

    /// 보조 생태계 마커를 설정합니다.
    pub fn secondary_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.secondary_marker = marker.into();
        self
    }

    /// 보조 생태계 예외 경로 목록을 교체합니다.
    pub fn secondary_exempt(mut self, paths: Vec<String>) -> Self {
        self.config.secondary_exempt = paths;
        self
    }

    /// 구문 마커 목록을 교체합니다.
    pub fn construct_markers(mut self, markers: Vec<String>) -> Self {
        self.config.construct_markers = markers;
        self
    }

    /// 설정을 검증하고 빌드합니다.
    ///
    /// # Errors
    ///
    /// 유효성 검증 실패 시 `ScanError::Config` 반환
    pub fn build(self) -> Result<ScannerConfig, ScanError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ScannerConfig::default();
        config.validate().unwrap();
    }

    #[test]
    fn default_config_values() {
        let config = ScannerConfig::default();
        assert_eq!(config.designated_header, "Python.h");
        assert_eq!(config.known_headers.len(), 8);
        assert!(config.known_headers.iter().any(|h| h == "ni_support.h"));
        assert_eq!(config.secondary_marker, "numpy");
        assert_eq!(config.secondary_exempt, vec!["numpy/utils.h"]);
        assert_eq!(config.construct_markers, vec!["py::", "PYBIND11_", "npy_"]);
    }

    #[test]
    fn validate_rejects_empty_designated_header() {
        let config = ScannerConfig {
            designated_header: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_designated_header_missing_from_known() {
        let config = ScannerConfig {
            designated_header: "Ruby.h".to_owned(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Ruby.h"));
    }

    #[test]
    fn validate_rejects_empty_known_header_entry() {
        let mut config = ScannerConfig::default();
        config.known_headers.push(" ".to_owned());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_secondary_marker() {
        let config = ScannerConfig {
            secondary_marker: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_construct_marker() {
        let config = ScannerConfig {
            construct_markers: vec!["py::".to_owned(), "  ".to_owned()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_no_construct_markers() {
        let config = ScannerConfig {
            construct_markers: vec![],
            ..Default::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn builder_adds_known_header() {
        let config = ScannerConfigBuilder::new()
            .known_header("module_api.h")
            .build()
            .unwrap();
        assert_eq!(config.known_headers.len(), 9);
        assert_eq!(config.known_headers.last().map(String::as_str), Some("module_api.h"));
    }

    #[test]
    fn builder_all_setters() {
        let config = ScannerConfigBuilder::new()
            .designated_header("ruby.h")
            .known_headers(vec!["ruby.h".to_owned(), "ruby/ruby.h".to_owned()])
            .secondary_marker("rice")
            .secondary_exempt(vec!["rice/util.h".to_owned()])
            .construct_markers(vec!["rb_".to_owned()])
            .build()
            .unwrap();

        assert_eq!(config.designated_header, "ruby.h");
        assert_eq!(config.known_headers, vec!["ruby.h", "ruby/ruby.h"]);
        assert_eq!(config.secondary_marker, "rice");
        assert_eq!(config.secondary_exempt, vec!["rice/util.h"]);
        assert_eq!(config.construct_markers, vec!["rb_"]);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let result = ScannerConfigBuilder::new()
            .designated_header("missing.h")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn config_serialize_roundtrip() {
        let config = ScannerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ScannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
