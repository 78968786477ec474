//! 진단 메시지 -- 스캔 중 보고되는 이벤트
//!
//! 스캐너는 진단을 반환값이 아닌 [`DiagnosticSink`]로 흘려보냅니다.
//! 호출자가 받는 결과는 위반 수뿐이며, 진단의 출력 방식은 싱크 구현이 결정합니다.
//! [`Display`](fmt::Display) 구현은 사람이 읽는 기존 메시지 형식을 그대로 따릅니다.

use std::fmt;

/// 진단이 출력될 스트림
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// 표준 에러 (순서 위반 진단)
    Stderr,
    /// 표준 출력 (디코딩 실패만 해당)
    Stdout,
}

/// 단일 진단
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// 지정 헤더보다 앞선 다른 헤더
    OutOfOrder {
        /// 대상 파일 경로
        path: String,
        /// 지정 헤더 이름
        designated_header: String,
        /// 지정 헤더(또는 그 파생 헤더)가 나온 줄
        designated_line: usize,
        /// 앞서 나온 다른 헤더의 줄 번호
        other_lines: Vec<usize>,
    },

    /// 지정 헤더보다 먼저 include된 보조 생태계 헤더
    SecondaryBeforeDesignated {
        /// 대상 파일 경로
        path: String,
        /// 지정 헤더 이름
        designated_header: String,
        /// 실제로 include된 보조 생태계 헤더
        header: String,
        /// 해당 줄 번호
        line: usize,
    },

    /// 지정 헤더 없이 사용된 구문
    ConstructBeforeHeader {
        /// 대상 파일 경로
        path: String,
        /// 해당 줄 번호
        line: usize,
    },

    /// UTF-8이 아닌 파일
    NotUtf8 {
        /// 대상 파일 경로
        path: String,
    },
}

impl Diagnostic {
    /// 진단 종류를 메트릭 레이블용 문자열로 반환합니다.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OutOfOrder { .. } => "out_of_order",
            Self::SecondaryBeforeDesignated { .. } => "secondary_before_designated",
            Self::ConstructBeforeHeader { .. } => "construct_before_header",
            Self::NotUtf8 { .. } => "not_utf8",
        }
    }

    /// 진단 대상 파일 경로를 반환합니다.
    pub fn path(&self) -> &str {
        match self {
            Self::OutOfOrder { path, .. }
            | Self::SecondaryBeforeDesignated { path, .. }
            | Self::ConstructBeforeHeader { path, .. }
            | Self::NotUtf8 { path } => path,
        }
    }

    /// 진단을 출력할 스트림을 반환합니다.
    pub fn channel(&self) -> Channel {
        match self {
            Self::NotUtf8 { .. } => Channel::Stdout,
            _ => Channel::Stderr,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder {
                path,
                designated_header,
                designated_line,
                other_lines,
            } => write!(
                f,
                "Header before {designated_header} in file {path}\n\
                 {designated_header} on line {designated_line}, \
                 other header(s) on line(s) {other_lines:?}"
            ),
            // 기존 도구의 문구는 실제 헤더와 무관하게 pybind11을 가리킨다.
            // 실제 헤더는 `header` 필드로 확인할 수 있다.
            Self::SecondaryBeforeDesignated {
                path,
                designated_header,
                line,
                ..
            } => write!(
                f,
                "{designated_header} not included before python-including header \
                 in file {path}\npybind11/pybind11.h on line {line}"
            ),
            Self::ConstructBeforeHeader { path, line } => write!(
                f,
                "Python-including header not used before python constructs \
                 in file {path}\nConstruct on line {line}"
            ),
            Self::NotUtf8 { path } => write!(f, "File {path} not utf-8"),
        }
    }
}

/// 진단 수신자
pub trait DiagnosticSink {
    /// 진단 하나를 받습니다.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
