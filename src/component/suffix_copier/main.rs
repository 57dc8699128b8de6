use super::renamer::{build_jobs, is_camera_file_name};
use crate::component::RunOutcome;
use crate::component::capture_organizer::{Ask, GateState};
use crate::config::Config;
use crate::tools::{
    CopyResult, copy_files, scan_matching_files, validate_directory_exists,
    validate_file_name_suffix,
};
use anyhow::Result;
use console::style;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 加上後綴複製元件
pub struct SuffixCopier {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl SuffixCopier {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self, ask: &mut dyn Ask) -> Result<RunOutcome> {
        println!("{}", style("=== 加上後綴複製相機檔案 ===").cyan().bold());

        let source = PathBuf::from(ask.ask("請輸入來源資料夾路徑")?.trim());
        validate_directory_exists(&source)?;

        let destination = PathBuf::from(ask.ask("請輸入目標資料夾路徑")?.trim());
        validate_directory_exists(&destination)?;

        println!("{}", style("掃描檔案中...").dim());
        let files = scan_matching_files(
            &source,
            self.config.settings.discovery_order,
            is_camera_file_name,
        )?;

        if files.is_empty() {
            println!(
                "{}",
                style("找不到任何符合 P[數字].JPG 命名規則的檔案").yellow()
            );
            return Ok(RunOutcome::NoMatchingFiles);
        }

        println!(
            "{}",
            style(format!("找到 {} 個檔案", files.len())).green()
        );

        let suffix = ask.ask("請輸入檔名後綴（按 Enter 略過）")?;
        let suffix = suffix.trim();
        validate_file_name_suffix(suffix)?;
        let jobs = build_jobs(&files, &destination, suffix);

        println!();
        for job in jobs.iter().take(10) {
            println!(
                "  {} {}",
                style("→").dim(),
                job.destination.display()
            );
        }
        if jobs.len() > 10 {
            println!("  {} ...還有 {} 個", style("⋯").dim(), jobs.len() - 10);
        }
        println!();

        let gate = GateState::Scanned
            .preview()
            .decide(ask.confirm("確定要複製這些檔案嗎？(yes/no)")?);
        if !gate.allows_execution() {
            println!("{}", style("操作已取消").yellow());
            return Ok(RunOutcome::Cancelled);
        }

        self.shutdown_signal.store(false, Ordering::SeqCst);
        let result = copy_files(
            &jobs,
            self.config.settings.collision_policy,
            &self.shutdown_signal,
        )?;

        self.print_result(&result);

        Ok(RunOutcome::Completed(result))
    }

    fn print_result(&self, result: &CopyResult) {
        println!();
        println!("{}", style("=== 複製結果 ===").cyan().bold());
        println!("  成功: {} 個", style(result.copied).green());
        if result.skipped > 0 {
            println!("  跳過: {} 個", style(result.skipped).yellow());
        }
        if result.errors > 0 {
            println!("  失敗: {} 個", style(result.errors).red());
        }

        info!(
            "後綴複製完成 - 成功: {}, 跳過: {}, 失敗: {}",
            result.copied, result.skipped, result.errors
        );
    }
}
