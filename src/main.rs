//! strip-whitespace - TRAILING WHITESPACE STRIPPER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::Path;

use strip_whitespace::{
    cli::Args,
    runner::{strip_tree, RunEvent},
    trimmer::{TrimResult, TrimStatus},
    walker::Walker,
    StripError,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 컬러 출력 설정
    configure_color(&args);

    // 루트 폴더 확인
    let root = args.resolve_root().context("루트 폴더를 확인할 수 없습니다")?;

    let walker = Walker::new(&root);

    // 헤더 출력
    print_header(&root, &walker);

    let stats = strip_tree(&walker, |event| match event {
        RunEvent::Processed(result) => print_result(result),
        RunEvent::Skipped(err) => print_skipped(err),
    });

    // 통계 출력
    stats.print_summary();

    Ok(())
}

/// 컬러 출력 여부 결정 (--no-color 또는 터미널이 아닌 경우 비활성화)
fn configure_color(args: &Args) {
    if args.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// 헤더 출력
fn print_header(root: &Path, walker: &Walker) {
    println!("{}", format!("Scanning directory: {}", root.display()).bright_cyan());
    println!(
        "{}",
        format!(
            "Looking for files with extensions: {}",
            walker.extensions()
        )
        .bright_cyan()
    );
}

/// 파일 처리 결과 출력
fn print_result(result: &TrimResult) {
    let message = result.message();
    match result.status {
        TrimStatus::Stripped => println!("{}", message.green()),
        TrimStatus::Unchanged => println!("{}", message.dimmed()),
        TrimStatus::Failed(_) => println!("{}", message.red()),
    }
}

/// 탐색 중 건너뛴 항목 경고
fn print_skipped(err: &StripError) {
    eprintln!(
        "{} {}",
        "Skipping unreadable entry:".yellow(),
        err.to_string().dimmed()
    );
}
