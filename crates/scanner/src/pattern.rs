//! 줄 단위 분류기 -- 블록 주석 추적과 include 지시문 매칭
//!
//! 전처리기가 아닌 휴리스틱입니다. 블록 주석 구분자는 한 줄 안에 온전히
//! 나타나고, 실제 include 지시문과 같은 줄에 오지 않는다고 가정합니다.

use regex::Regex;

use crate::error::ScanError;

/// `#include <a/b.h>` / `#include "a.hpp"` 형태의 지시문 패턴
///
/// 경로는 `/`로 구분된 단어 문자로만 구성되며, `.h`, `.hh`, `.hpp`, `.h++` 등의
/// 접미사를 선택적으로 가집니다.
pub const INCLUDE_PATTERN: &str = r#"^\s*#\s*include\s*[<"]((?:\w+/)*\w+(?:\.h[hp+]{0,2})?)[>"]\s*$"#;

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// include 지시문 매처
///
/// 정규식은 생성 시 한 번만 컴파일합니다.
#[derive(Debug, Clone)]
pub struct IncludeMatcher {
    regex: Regex,
}

impl IncludeMatcher {
    /// 기본 include 패턴으로 매처를 생성합니다.
    pub fn new() -> Result<Self, ScanError> {
        let regex = Regex::new(INCLUDE_PATTERN).map_err(|e| ScanError::Config {
            field: "include_pattern".to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// 줄 전체가 include 지시문이면 include된 경로를 반환합니다.
    ///
    /// `line`에는 줄바꿈 문자가 포함되지 않아야 합니다.
    pub fn included_path<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// 블록 주석 추적기
///
/// `/*`를 포함한 줄은 항상 건너뜁니다. 같은 줄에 `*/`가 없으면 블록 주석
/// 모드로 들어가며, `*/`를 포함한 줄(역시 건너뜀)에서 빠져나옵니다.
#[derive(Debug, Clone, Default)]
pub struct CommentTracker {
    in_block: bool,
}

impl CommentTracker {
    /// 새 추적기를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 블록 주석 안에 있는지 반환합니다.
    pub fn in_block(&self) -> bool {
        self.in_block
    }

    /// 줄을 관찰하고, 분류 없이 건너뛰어야 하면 `true`를 반환합니다.
    pub fn skip(&mut self, line: &str) -> bool {
        // 여는 표시 검사가 먼저: 주석 안의 "/*" 줄은 모드를 유지한다
        if line.contains(BLOCK_OPEN) {
            if !line.contains(BLOCK_CLOSE) {
                self.in_block = true;
            }
            return true;
        }

        if self.in_block {
            if line.contains(BLOCK_CLOSE) {
                self.in_block = false;
            }
            return true;
        }

        false
    }
}
