//! 줄 끝 공백 제거 모듈
//!
//! 개별 파일의 읽기, 공백 검사, 재작성을 담당합니다.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StripError};

/// 줄 끝 공백으로 취급하는 문자 (스페이스, 탭)
const TRAILING_WHITESPACE: &[char] = &[' ', '\t'];

/// 줄 종결자 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// 종결자 없음 (파일의 마지막 줄)
    None,
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::None => "",
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// 종결자를 분리한 한 줄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 종결자를 제외한 내용
    pub content: &'a str,
    pub ending: LineEnding,
}

impl<'a> Line<'a> {
    /// 종결자 바로 앞에 스페이스/탭이 있는지 확인
    pub fn has_trailing_whitespace(&self) -> bool {
        self.content.ends_with(TRAILING_WHITESPACE)
    }

    /// 줄 끝 공백을 제거한 내용
    pub fn trimmed(&self) -> &'a str {
        self.content.trim_end_matches(TRAILING_WHITESPACE)
    }
}

/// 텍스트를 종결자 정보가 보존된 줄 단위로 분리
///
/// `\n`과 `\r\n`만 종결자로 인식하며, 단독 `\r`은 내용으로 취급합니다.
/// 빈 텍스트는 줄이 없습니다.
pub fn split_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split_inclusive('\n').map(|raw| {
        if let Some(content) = raw.strip_suffix("\r\n") {
            Line {
                content,
                ending: LineEnding::CrLf,
            }
        } else if let Some(content) = raw.strip_suffix('\n') {
            Line {
                content,
                ending: LineEnding::Lf,
            }
        } else {
            Line {
                content: raw,
                ending: LineEnding::None,
            }
        }
    })
}

/// 재작성이 필요한지 확인 (한 줄이라도 줄 끝 공백이 있으면 true)
pub fn needs_rewrite(text: &str) -> bool {
    split_lines(text).any(|line| line.has_trailing_whitespace())
}

/// 모든 줄의 끝 공백을 제거하고 원래 종결자를 다시 붙인 텍스트 반환
///
/// # Examples
/// ```
/// use strip_whitespace::trimmer::strip_text;
///
/// assert_eq!(strip_text("a  \nb\t\r\nc"), "a\nb\r\nc");
/// ```
pub fn strip_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in split_lines(text) {
        out.push_str(line.trimmed());
        out.push_str(line.ending.as_str());
    }
    out
}

/// 파일 처리 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimStatus {
    /// 공백을 제거하고 파일을 다시 씀
    Stripped,
    /// 제거할 공백이 없어 파일을 건드리지 않음
    Unchanged,
    /// 읽기/디코딩/쓰기 실패 (메시지 포함)
    Failed(String),
}

/// 파일 처리 결과
#[derive(Debug, Clone)]
pub struct TrimResult {
    /// 처리된 파일 경로
    pub path: PathBuf,
    pub status: TrimStatus,
    /// 제거된 바이트 수
    pub bytes_removed: u64,
}

impl TrimResult {
    /// 공백 제거 결과 생성
    pub fn stripped(path: PathBuf, bytes_removed: u64) -> Self {
        Self {
            path,
            status: TrimStatus::Stripped,
            bytes_removed,
        }
    }

    /// 변경 없음 결과 생성
    pub fn unchanged(path: PathBuf) -> Self {
        Self {
            path,
            status: TrimStatus::Unchanged,
            bytes_removed: 0,
        }
    }

    /// 실패 결과 생성
    pub fn failure(path: PathBuf, error: String) -> Self {
        Self {
            path,
            status: TrimStatus::Failed(error),
            bytes_removed: 0,
        }
    }

    pub fn is_stripped(&self) -> bool {
        self.status == TrimStatus::Stripped
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, TrimStatus::Failed(_))
    }

    /// 콘솔에 출력할 한 줄 메시지
    pub fn message(&self) -> String {
        match &self.status {
            TrimStatus::Stripped => {
                format!("Stripped trailing whitespace from: {}", self.path.display())
            }
            TrimStatus::Unchanged => format!("No trailing whitespace in: {}", self.path.display()),
            TrimStatus::Failed(error) => {
                format!("Error processing {}: {}", self.path.display(), error)
            }
        }
    }
}

/// 단일 파일 처리
///
/// 에러는 결과 안에 담기며 panic하지 않습니다. 재작성은 원자적이지 않아
/// 쓰기 도중 중단되면 파일 내용이 잘릴 수 있습니다.
pub fn process_file(path: PathBuf) -> TrimResult {
    match process_file_internal(&path) {
        Ok(Some(removed)) => TrimResult::stripped(path, removed),
        Ok(None) => TrimResult::unchanged(path),
        Err(e) => TrimResult::failure(path, e.to_string()),
    }
}

/// 내부 파일 처리 로직 (재작성 시 제거된 바이트 수 반환)
fn process_file_internal(path: &Path) -> Result<Option<u64>> {
    let text = read_text(path)?;

    if !needs_rewrite(&text) {
        return Ok(None);
    }

    let stripped = strip_text(&text);
    fs::write(path, stripped.as_bytes()).map_err(|e| StripError::Write {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(Some((text.len() - stripped.len()) as u64))
}

/// 파일을 UTF-8 텍스트로 읽기
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| StripError::Read {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| StripError::Decode {
        file: path.to_path_buf(),
        reason: e.utf8_error().to_string(),
    })
}
