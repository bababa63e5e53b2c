//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 루트 폴더 결정을 담당합니다.

use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Result, StripError};

/// strip-whitespace CLI 인자 구조체
#[derive(Parser, Debug, Default)]
#[command(
    name = "strip-whitespace",
    author = "YourName <your@email.com>",
    version,
    about = "TRAILING WHITESPACE STRIPPER - 현재 폴더 아래 텍스트 파일의 줄 끝 공백을 제거합니다",
    long_about = r#"
TRAILING WHITESPACE STRIPPER
============================

현재 작업 디렉토리부터 모든 하위 폴더를 탐색하여
지정된 확장자의 텍스트 파일에서 줄 끝 공백(스페이스, 탭)을 제거합니다.

특징:
  • 줄바꿈 구조 유지 (LF / CRLF, 마지막 줄 개행 여부)
  • node_modules 폴더는 건너뜀
  • 공백이 없는 파일은 다시 쓰지 않음
  • 파일별 오류가 전체 실행을 중단하지 않음

대상 확장자:
  .js .css .html .example .md .mmd .py .yaml .yml .sh .txt .h .cpp

예제:
  strip-whitespace
  strip-whitespace --no-color > report.txt
"#
)]
pub struct Args {
    /// 컬러 출력 비활성화 (터미널이 아니면 자동으로 비활성화)
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// 탐색할 루트 폴더 반환 (현재 작업 디렉토리)
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let cwd = env::current_dir().map_err(|e| StripError::CurrentDir {
            reason: e.to_string(),
        })?;
        validate_root(&cwd)?;
        Ok(cwd)
    }
}

/// 루트 경로가 존재하는 폴더인지 확인
pub fn validate_root(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(StripError::RootNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_dir() {
        return Err(StripError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
