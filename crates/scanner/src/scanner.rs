//! 순서 스캐너 -- 파일 한 개에 대한 단일 패스 검사
//!
//! [`OrderingScanner`]는 실행 전체에 걸쳐 [`KnownHeaderRegistry`]를 소유합니다.
//! 각 파일은 새 [`ScanState`]로 위에서 아래로 한 번 스캔되며, 지정 헤더를
//! include한 것으로 확인된 파일의 basename은 레지스트리에 추가되어
//! 이후 스캔에 영향을 줍니다.
//!
//! # 줄 분류
//!
//! ```text
//! line --> CommentTracker --(skip)--> 다음 줄
//!               |
//!               v
//!         IncludeMatcher --(match)--> 지정 헤더 / 보조 생태계 헤더 / 기타 헤더
//!               |
//!               v (no match)
//!         construct markers --> ConstructBeforeHeader (파일당 최대 1회)
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::config::ScannerConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::ScanError;
use crate::metrics as m;
use crate::pattern::{CommentTracker, IncludeMatcher};
use crate::registry::KnownHeaderRegistry;

/// 파일 한 개의 스캔 상태
#[derive(Debug, Default)]
struct ScanState {
    /// 지정 헤더(또는 등록된 파생 헤더)를 봤는지 여부
    included_designated: bool,
    /// 지정 헤더 이전에 나온 다른 헤더의 줄 번호
    other_header_lines: Vec<usize>,
    /// 구문 진단을 이미 보고했는지 여부
    warned_construct: bool,
    comments: CommentTracker,
}

impl ScanState {
    /// 위반 수: 지정 헤더가 나왔다면 앞선 헤더 줄 수, 아니면 0
    fn violations(&self) -> usize {
        if self.included_designated {
            self.other_header_lines.len()
        } else {
            0
        }
    }
}

/// 스캔 중인 파일의 이름 정보
struct FileLabel {
    /// 진단에 표시할 경로 (입력 그대로)
    display: String,
    /// 경로의 마지막 구성 요소
    basename: String,
}

impl FileLabel {
    fn new(path: &Path) -> Self {
        Self {
            display: path.display().to_string(),
            basename: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// 파일 이름 자체가 헤더처럼 보이는지 (`.h` 포함)
    fn looks_like_header(&self) -> bool {
        self.basename.contains(".h")
    }
}

/// include 순서 스캐너
///
/// 드라이버가 실행당 한 번 생성하고, 모든 파일 스캔에 같은 인스턴스를 사용합니다.
pub struct OrderingScanner {
    config: ScannerConfig,
    matcher: IncludeMatcher,
    registry: KnownHeaderRegistry,
}

impl OrderingScanner {
    /// 설정을 검증하고 스캐너를 생성합니다.
    ///
    /// 레지스트리는 `config.known_headers`로 초기화됩니다.
    pub fn new(config: ScannerConfig) -> Result<Self, ScanError> {
        config.validate()?;
        let matcher = IncludeMatcher::new()?;
        let registry = KnownHeaderRegistry::with_headers(config.known_headers.iter().cloned());
        metrics::gauge!(m::REGISTRY_SIZE).set(registry.len() as f64);

        Ok(Self {
            config,
            matcher,
            registry,
        })
    }

    /// 스캐너 설정을 반환합니다.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// 현재 레지스트리를 반환합니다.
    pub fn registry(&self) -> &KnownHeaderRegistry {
        &self.registry
    }

    /// 파일을 읽어 스캔하고 위반 수를 반환합니다.
    ///
    /// # Errors
    ///
    /// - `ScanError::Io`: 파일을 읽을 수 없음
    /// - `ScanError::Decode`: 파일이 UTF-8이 아님. 이 경우 레지스트리와 싱크는
    ///   변경되지 않습니다.
    pub fn scan_file(
        &mut self,
        path: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<usize, ScanError> {
        let bytes = std::fs::read(path).map_err(|e| ScanError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let content = String::from_utf8(bytes).map_err(|_| ScanError::Decode {
            path: path.display().to_string(),
        })?;

        Ok(self.scan_source(path, &content, sink))
    }

    /// 이미 읽은 내용을 `path` 파일로 간주하여 스캔합니다.
    ///
    /// `path`는 진단 표시와 basename 판별(레지스트리 등록, 헤더 여부)에만 쓰입니다.
    pub fn scan_source(
        &mut self,
        path: &Path,
        content: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> usize {
        let label = FileLabel::new(path);
        let mut state = ScanState::default();

        for (idx, line) in split_lines(content).enumerate() {
            self.observe_line(&mut state, &label, idx + 1, line, sink);
        }

        let violations = state.violations();

        metrics::counter!(m::FILES_SCANNED_TOTAL).increment(1);
        metrics::counter!(m::VIOLATIONS_TOTAL).increment(violations as u64);
        debug!(
            path = %label.display,
            included = state.included_designated,
            violations,
            "file scanned"
        );

        violations
    }

    fn observe_line(
        &mut self,
        state: &mut ScanState,
        label: &FileLabel,
        lineno: usize,
        line: &str,
        sink: &mut dyn DiagnosticSink,
    ) {
        if state.comments.skip(line) {
            return;
        }

        match self.matcher.included_path(line) {
            Some(header) => self.observe_include(state, label, lineno, header, sink),
            None => self.observe_code(state, label, lineno, line, sink),
        }
    }

    fn observe_include(
        &mut self,
        state: &mut ScanState,
        label: &FileLabel,
        lineno: usize,
        header: &str,
        sink: &mut dyn DiagnosticSink,
    ) {
        if self.registry.contains(header) {
            if !state.other_header_lines.is_empty() && !state.included_designated {
                emit(
                    sink,
                    Diagnostic::OutOfOrder {
                        path: label.display.clone(),
                        designated_header: self.config.designated_header.clone(),
                        designated_line: lineno,
                        other_lines: state.other_header_lines.clone(),
                    },
                );
            }
            state.included_designated = true;
            self.register_file(label);
        } else if !state.included_designated && self.is_secondary_header(header) {
            emit(
                sink,
                Diagnostic::SecondaryBeforeDesignated {
                    path: label.display.clone(),
                    designated_header: self.config.designated_header.clone(),
                    header: header.to_owned(),
                    line: lineno,
                },
            );
        } else if !state.included_designated {
            state.other_header_lines.push(lineno);
        }
    }

    fn observe_code(
        &self,
        state: &mut ScanState,
        label: &FileLabel,
        lineno: usize,
        line: &str,
        sink: &mut dyn DiagnosticSink,
    ) {
        if state.included_designated || state.warned_construct || label.looks_like_header() {
            return;
        }

        if self
            .config
            .construct_markers
            .iter()
            .any(|marker| line.contains(marker.as_str()))
        {
            emit(
                sink,
                Diagnostic::ConstructBeforeHeader {
                    path: label.display.clone(),
                    line: lineno,
                },
            );
            state.warned_construct = true;
        }
    }

    fn is_secondary_header(&self, header: &str) -> bool {
        header.contains(self.config.secondary_marker.as_str())
            && !self.config.secondary_exempt.iter().any(|exempt| exempt == header)
    }

    fn register_file(&mut self, label: &FileLabel) {
        if self.registry.register(label.basename.clone()) {
            info!(
                path = %label.display,
                header = %label.basename,
                "registered header as including the designated header"
            );
            metrics::gauge!(m::REGISTRY_SIZE).set(self.registry.len() as f64);
        }
    }
}

/// `\n`, `\r\n`, 단독 `\r`을 모두 줄 끝으로 보고 내용을 줄 단위로 나눕니다.
///
/// 마지막 줄 끝 뒤에는 빈 줄을 만들지 않습니다.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(i) => {
                let line = &rest[..i];
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

fn emit(sink: &mut dyn DiagnosticSink, diagnostic: Diagnostic) {
    metrics::counter!(m::DIAGNOSTICS_TOTAL, m::LABEL_KIND => diagnostic.kind()).increment(1);
    sink.emit(diagnostic);
}
