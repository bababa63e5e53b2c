//! strip-whitespace - TRAILING WHITESPACE STRIPPER
//!
//! 현재 폴더 아래의 텍스트 파일을 재귀적으로 탐색하여 줄 끝 공백(스페이스, 탭)을
//! 제거하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **확장자 필터링**: `.js`, `.md`, `.py` 등 고정된 텍스트 확장자만 처리
//! - 🚫 **제외 폴더**: 경로에 `node_modules`가 포함된 폴더는 건너뜀
//! - ↩️ **줄바꿈 보존**: LF / CRLF 및 마지막 줄 개행 여부를 그대로 유지
//! - 📊 **요약 통계**: 발견/처리/제거/실패 파일 수 표시
//! - 🎨 **컬러 출력**: 터미널에서만 컬러 적용
//!
//! # 예제
//!
//! ```bash
//! # 현재 폴더 처리
//! strip-whitespace
//!
//! # 컬러 없이 결과 저장
//! strip-whitespace --no-color > report.txt
//! ```

pub mod cli;
pub mod error;
pub mod runner;
pub mod stats;
pub mod trimmer;
pub mod walker;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{Result, StripError};
pub use runner::{strip_tree, RunEvent};
pub use stats::{format_bytes, RunStats};
pub use trimmer::{process_file, TrimResult, TrimStatus};
pub use walker::{ExtensionSet, Walker};
