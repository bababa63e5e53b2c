//! 에러 타입 정의 모듈
//!
//! strip-whitespace에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// strip-whitespace에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum StripError {
    /// 루트 폴더가 존재하지 않음
    #[error("root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// 루트 경로가 폴더가 아님
    #[error("root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// 현재 작업 디렉토리를 확인할 수 없음
    #[error("cannot determine current directory: {reason}")]
    CurrentDir { reason: String },

    /// 폴더 탐색 중 항목을 읽지 못함 (해당 항목만 건너뜀)
    #[error("{reason}")]
    Traversal {
        path: Option<PathBuf>,
        reason: String,
    },

    /// 파일 읽기 실패
    #[error("failed to read file: {reason}")]
    Read { file: PathBuf, reason: String },

    /// UTF-8 디코딩 실패
    #[error("invalid UTF-8: {reason}")]
    Decode { file: PathBuf, reason: String },

    /// 파일 쓰기 실패
    #[error("failed to write file: {reason}")]
    Write { file: PathBuf, reason: String },
}

impl From<walkdir::Error> for StripError {
    fn from(err: walkdir::Error) -> Self {
        StripError::Traversal {
            path: err.path().map(|p| p.to_path_buf()),
            reason: err.to_string(),
        }
    }
}

/// strip-whitespace 결과 타입 별칭
pub type Result<T> = std::result::Result<T, StripError>;
