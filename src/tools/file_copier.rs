//! 檔案複製執行器
//!
//! 依計畫建立目標資料夾並逐一複製檔案，來源檔案不會被修改或刪除

use crate::config::CollisionPolicy;
use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一複製工作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// 複製結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyResult {
    /// 成功複製的檔案數
    pub copied: usize,
    /// 因目標已存在而跳過的檔案數
    pub skipped: usize,
    /// 複製失敗的檔案數
    pub errors: usize,
    /// 是否因中斷訊號提前結束
    pub interrupted: bool,
}

impl CopyResult {
    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.copied + self.skipped + self.errors
    }
}

/// 列出目前已存在於磁碟上的目標路徑（唯讀檢查）
#[must_use]
pub fn existing_targets(jobs: &[CopyJob]) -> Vec<&Path> {
    jobs.iter()
        .map(|job| job.destination.as_path())
        .filter(|destination| destination.exists())
        .collect()
}

/// 依序執行複製工作
///
/// 單一檔案失敗只記錄並計數，不會中止整批
pub fn copy_files(
    jobs: &[CopyJob],
    policy: CollisionPolicy,
    shutdown_signal: &AtomicBool,
) -> Result<CopyResult> {
    let mut result = CopyResult::default();

    let progress_bar = ProgressBar::new(jobs.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("複製中...");

    for job in jobs {
        if shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止複製");
            progress_bar.abandon_with_message("操作已中斷");
            result.interrupted = true;
            return Ok(result);
        }

        if policy == CollisionPolicy::Skip && job.destination.exists() {
            debug!("跳過已存在的檔案: {}", job.destination.display());
            result.skipped += 1;
            progress_bar.inc(1);
            continue;
        }

        match copy_one(job) {
            Ok(()) => {
                debug!(
                    "複製檔案: {} -> {}",
                    job.source.display(),
                    job.destination.display()
                );
                result.copied += 1;
            }
            Err(e) => {
                warn!("複製檔案失敗 {}: {e:#}", job.source.display());
                result.errors += 1;
            }
        }

        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("完成");

    info!(
        "複製完成 - 成功: {}, 跳過: {}, 失敗: {}",
        result.copied, result.skipped, result.errors
    );

    Ok(result)
}

fn copy_one(job: &CopyJob) -> Result<()> {
    if let Some(parent) = job.destination.parent() {
        ensure_directory_exists(parent)?;
    }

    fs::copy(&job.source, &job.destination).with_context(|| {
        format!(
            "複製檔案失敗: {} -> {}",
            job.source.display(),
            job.destination.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn job(source: PathBuf, destination: PathBuf) -> CopyJob {
        CopyJob {
            source,
            destination,
        }
    }

    #[test]
    fn test_copy_creates_folders_and_keeps_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.jpg");
        fs::write(&source, "content").unwrap();
        let destination = temp_dir.path().join("out/20230101/b.jpg");

        let result = copy_files(
            &[job(source.clone(), destination.clone())],
            CollisionPolicy::Overwrite,
            &AtomicBool::new(false),
        )
        .unwrap();

        assert_eq!(result.copied, 1);
        assert_eq!(fs::read_to_string(&destination).unwrap(), "content");
        assert!(source.exists());
    }

    #[test]
    fn test_overwrite_policy_later_write_wins() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.jpg");
        let second = temp_dir.path().join("second.jpg");
        fs::write(&first, "first").unwrap();
        fs::write(&second, "second").unwrap();
        let destination = temp_dir.path().join("out/same.jpg");

        let result = copy_files(
            &[
                job(first, destination.clone()),
                job(second, destination.clone()),
            ],
            CollisionPolicy::Overwrite,
            &AtomicBool::new(false),
        )
        .unwrap();

        assert_eq!(result.copied, 2);
        assert_eq!(fs::read_to_string(&destination).unwrap(), "second");
    }

    #[test]
    fn test_skip_policy_keeps_existing_target() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.jpg");
        fs::write(&source, "new").unwrap();
        let destination = temp_dir.path().join("existing.jpg");
        fs::write(&destination, "old").unwrap();

        let jobs = [job(source, destination.clone())];
        assert_eq!(existing_targets(&jobs), vec![destination.as_path()]);

        let result = copy_files(&jobs, CollisionPolicy::Skip, &AtomicBool::new(false)).unwrap();

        assert_eq!(result.skipped, 1);
        assert_eq!(result.copied, 0);
        assert_eq!(fs::read_to_string(&destination).unwrap(), "old");
    }

    #[test]
    fn test_missing_source_is_counted_and_batch_continues() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.jpg");
        fs::write(&good, "ok").unwrap();

        let result = copy_files(
            &[
                job(temp_dir.path().join("missing.jpg"), temp_dir.path().join("out/x.jpg")),
                job(good, temp_dir.path().join("out/good.jpg")),
            ],
            CollisionPolicy::Overwrite,
            &AtomicBool::new(false),
        )
        .unwrap();

        assert_eq!(result.errors, 1);
        assert_eq!(result.copied, 1);
        assert_eq!(result.total_files(), 2);
    }

    #[test]
    fn test_shutdown_signal_stops_before_copy() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.jpg");
        fs::write(&source, "content").unwrap();
        let destination = temp_dir.path().join("out/a.jpg");

        let result = copy_files(
            &[job(source, destination.clone())],
            CollisionPolicy::Overwrite,
            &AtomicBool::new(true),
        )
        .unwrap();

        assert!(result.interrupted);
        assert_eq!(result.copied, 0);
        assert!(!destination.exists());
    }
}
