//! 依拍攝時間整理主模組
//!
//! 協調掃描、時間校正、計畫預覽、確認與複製的整體流程

use super::gate::GateState;
use super::planner::{CapturePlan, build_plan};
use super::prompt::{Ask, collect_adjustment};
use crate::component::RunOutcome;
use crate::config::Config;
use crate::tools::{
    CopyResult, copy_files, existing_targets, is_capture_file_name, scan_matching_files,
    validate_directory_exists, validate_file_name_suffix,
};
use anyhow::Result;
use console::style;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 預覽時最多列出的項目數
const PREVIEW_LIMIT: usize = 10;

/// 依拍攝時間整理檔案元件
pub struct CaptureOrganizer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl CaptureOrganizer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self, ask: &mut dyn Ask) -> Result<RunOutcome> {
        println!("{}", style("=== 依拍攝時間整理檔案 ===").cyan().bold());

        let source = PathBuf::from(ask.ask("請輸入來源資料夾路徑")?.trim());
        validate_directory_exists(&source)?;

        let destination = ask.ask("請輸入目標資料夾路徑（按 Enter 使用來源資料夾）")?;
        let destination = match destination.trim() {
            "" => source.clone(),
            path => PathBuf::from(path),
        };
        validate_directory_exists(&destination)?;

        println!("{}", style("掃描檔案中...").dim());
        let files = scan_matching_files(
            &source,
            self.config.settings.discovery_order,
            is_capture_file_name,
        )?;

        if files.is_empty() {
            println!("{}", style("找不到任何符合 PXL_ 命名規則的檔案").yellow());
            return Ok(RunOutcome::NoMatchingFiles);
        }

        println!(
            "{}",
            style(format!("找到 {} 個檔案", files.len())).green()
        );

        let suffix = ask.ask("請輸入檔名後綴（按 Enter 略過）")?;
        let suffix = suffix.trim();
        validate_file_name_suffix(suffix)?;

        let adjustment = collect_adjustment(ask)?;
        if let Some(spec) = adjustment {
            let offset = spec.signed_offset_seconds();
            info!("校正檔案時間 {offset} 秒");
            println!(
                "{}",
                style(format!("將校正檔案時間 {offset} 秒")).cyan()
            );
        }

        let plan = build_plan(&files, &destination, suffix, adjustment);

        self.print_preview(&plan);
        let gate = GateState::Scanned
            .preview()
            .decide(ask.confirm("確定要執行嗎？(yes/no)")?);
        if !gate.allows_execution() {
            println!("{}", style("操作已取消").yellow());
            info!("使用者取消整理");
            return Ok(RunOutcome::Cancelled);
        }

        // 確認前按下的 Ctrl-C 不影響本次執行
        self.shutdown_signal.store(false, Ordering::SeqCst);

        println!("{}", style("複製檔案中...").cyan());
        let result = copy_files(
            &plan.copy_jobs(),
            self.config.settings.collision_policy,
            &self.shutdown_signal,
        )?;

        self.print_result(&result);

        Ok(RunOutcome::Completed(result))
    }

    fn print_preview(&self, plan: &CapturePlan) {
        let suffix = if plan.suffix().is_empty() {
            "none"
        } else {
            plan.suffix()
        };

        println!();
        println!(
            "{} {}",
            style("將建立以下資料夾:").cyan(),
            plan.folders().join(", ")
        );
        println!("{} \"{}\"", style("使用的後綴:").cyan(), suffix);
        println!(
            "{} {}",
            style("目標資料夾:").cyan(),
            plan.destination_root().display()
        );

        let collisions = plan.collisions();
        if !collisions.is_empty() {
            println!();
            println!(
                "{}",
                style(format!(
                    "警告：{} 個目標檔名重複，後複製的檔案會依設定處理（{}）",
                    collisions.len(),
                    self.config.settings.collision_policy
                ))
                .yellow()
            );
            for collision in collisions.iter().take(PREVIEW_LIMIT) {
                println!(
                    "  {} {} <- {}",
                    style("!").yellow(),
                    collision.destination.display(),
                    collision.original_names.join(", ")
                );
            }
            if collisions.len() > PREVIEW_LIMIT {
                println!(
                    "  {} ...還有 {} 個",
                    style("⋯").dim(),
                    collisions.len() - PREVIEW_LIMIT
                );
            }
        }

        let jobs = plan.copy_jobs();
        let existing = existing_targets(&jobs);
        if !existing.is_empty() {
            println!();
            println!(
                "{}",
                style(format!(
                    "警告：{} 個目標檔案已存在（{}）",
                    existing.len(),
                    self.config.settings.collision_policy
                ))
                .yellow()
            );
            for path in existing.iter().take(PREVIEW_LIMIT) {
                println!("  {} {}", style("!").yellow(), path.display());
            }
        }

        println!();
    }

    fn print_result(&self, result: &CopyResult) {
        println!();
        println!("{}", style("=== 整理結果 ===").cyan().bold());
        println!("  成功複製: {} 個檔案", style(result.copied).green());

        if result.skipped > 0 {
            println!("  已跳過（目標已存在）: {} 個", style(result.skipped).yellow());
        }

        if result.errors > 0 {
            println!("  失敗: {} 個檔案", style(result.errors).red());
        }

        if result.interrupted {
            println!("{}", style("操作已中斷，目標資料夾可能只完成部分複製").red());
        }

        info!(
            "拍攝檔案整理完成 - 複製: {}, 跳過: {}, 失敗: {}",
            result.copied, result.skipped, result.errors
        );
    }
}
