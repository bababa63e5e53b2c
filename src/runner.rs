//! 실행 흐름 모듈
//!
//! 탐색기가 찾은 파일을 하나씩 처리하고 통계를 모읍니다.

use crate::error::StripError;
use crate::stats::RunStats;
use crate::trimmer::{process_file, TrimResult};
use crate::walker::Walker;

/// 실행 중 발생하는 이벤트
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// 파일 하나의 처리가 끝남
    Processed(&'a TrimResult),
    /// 탐색 중 읽을 수 없는 항목을 건너뜀
    Skipped(&'a StripError),
}

/// 루트 아래 모든 대상 파일의 줄 끝 공백을 제거
///
/// 파일은 한 번에 하나씩 읽고, 판단하고, 필요하면 다시 쓴 뒤 다음 파일로
/// 넘어갑니다. 개별 실패는 이벤트로 전달될 뿐 실행을 중단하지 않습니다.
pub fn strip_tree<F>(walker: &Walker, mut on_event: F) -> RunStats
where
    F: FnMut(RunEvent<'_>),
{
    let mut stats = RunStats::new();

    for entry in walker.entries() {
        match entry {
            Ok(path) => {
                stats.record_found();
                let result = process_file(path);
                stats.record(&result);
                on_event(RunEvent::Processed(&result));
            }
            Err(err) => {
                stats.record_skipped();
                on_event(RunEvent::Skipped(&err));
            }
        }
    }

    stats
}
