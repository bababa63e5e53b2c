//! 통계 및 유틸리티 모듈
//!
//! 실행 통계 수집 및 요약 출력을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::trimmer::{TrimResult, TrimStatus};

/// 한 번의 실행에 대한 통계
#[derive(Debug, Default)]
pub struct RunStats {
    /// 발견된 대상 파일 수
    pub found: usize,
    /// 처리를 시도한 파일 수
    pub processed: usize,
    /// 공백을 제거한 파일 수
    pub stripped: usize,
    /// 변경 없는 파일 수
    pub unchanged: usize,
    /// 처리 실패 파일 수
    pub errors: usize,
    /// 탐색 중 건너뛴 항목 수
    pub skipped_entries: usize,
    /// 제거된 총 바이트
    pub bytes_removed: u64,
    /// 실행 시작 시간
    start_time: Option<Instant>,
}

impl RunStats {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn record_found(&mut self) {
        self.found += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped_entries += 1;
    }

    /// 파일 처리 결과 반영
    pub fn record(&mut self, result: &TrimResult) {
        self.processed += 1;
        match result.status {
            TrimStatus::Stripped => {
                self.stripped += 1;
                self.bytes_removed += result.bytes_removed;
            }
            TrimStatus::Unchanged => self.unchanged += 1,
            TrimStatus::Failed(_) => self.errors += 1,
        }
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", "Summary:".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("Found {} applicable files", self.found);
        println!("Processed {} files", self.processed);

        println!(
            "  {} {}",
            "Stripped: ".bright_green(),
            self.stripped.to_string().green()
        );
        println!("  {} {}", "Unchanged:".dimmed(), self.unchanged);

        if self.errors > 0 {
            println!(
                "  {} {}",
                "Errors:   ".bright_red(),
                self.errors.to_string().red()
            );
        } else {
            println!("  {} {}", "Errors:   ".bright_green(), "0".green());
        }

        if self.skipped_entries > 0 {
            println!(
                "  {} {}",
                "Skipped:  ".bright_yellow(),
                self.skipped_entries.to_string().yellow()
            );
        }

        println!(
            "  {} {}",
            "Removed:  ".bright_magenta(),
            format_bytes(self.bytes_removed)
        );
        println!(
            "  {} {}",
            "Elapsed:  ".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use strip_whitespace::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}s", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
