//! 지정 헤더를 포함한다고 알려진 헤더 레지스트리
//!
//! [`KnownHeaderRegistry`]는 한 번의 실행 동안 유지되며 항목이 추가만 됩니다.
//! 지정 헤더를 include한 것으로 확인된 파일은 basename이 등록되어,
//! 이후 그 파일을 include하는 파일도 요구 사항을 만족한 것으로 취급됩니다.

use std::collections::HashSet;

/// 지정 헤더를 (간접적으로) 포함하는 헤더 이름 집합
#[derive(Debug, Clone, Default)]
pub struct KnownHeaderRegistry {
    headers: HashSet<String>,
}

impl KnownHeaderRegistry {
    /// 사전 등록 헤더 목록으로 레지스트리를 생성합니다.
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
        }
    }

    /// 헤더가 등록되어 있는지 확인합니다.
    pub fn contains(&self, header: &str) -> bool {
        self.headers.contains(header)
    }

    /// 헤더를 등록합니다. 새로 추가된 경우 `true`를 반환합니다.
    pub fn register(&mut self, header: impl Into<String>) -> bool {
        self.headers.insert(header.into())
    }

    /// 등록된 헤더 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// 레지스트리가 비어있는지 반환합니다.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// 등록된 헤더를 정렬된 순서로 반환합니다.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
