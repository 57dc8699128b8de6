//! 整理計畫建立模組
//!
//! 純計算：依檔名時間（含校正）決定每個檔案的目標資料夾與新檔名，
//! 不會建立資料夾或複製檔案

use crate::tools::{AdjustmentSpec, CaptureName, CaptureTimestamp, CopyJob, adjust};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 單一檔案的整理工作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub original_name: String,
    pub source_path: PathBuf,
    pub captured_at: CaptureTimestamp,
    pub adjusted_at: CaptureTimestamp,
    pub destination_folder: PathBuf,
    pub destination_name: String,
}

impl FileTask {
    #[must_use]
    pub fn destination_path(&self) -> PathBuf {
        self.destination_folder.join(&self.destination_name)
    }

    #[must_use]
    pub fn copy_job(&self) -> CopyJob {
        CopyJob {
            source: self.source_path.clone(),
            destination: self.destination_path(),
        }
    }
}

/// 多個工作指向同一目標路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub destination: PathBuf,
    /// 依計畫順序排列的原始檔名，最後一個會覆寫前面的
    pub original_names: Vec<String>,
}

/// 一次執行的完整整理計畫
#[derive(Debug, Clone)]
pub struct CapturePlan {
    tasks: Vec<FileTask>,
    destination_root: PathBuf,
    suffix: String,
}

impl CapturePlan {
    #[must_use]
    pub fn tasks(&self) -> &[FileTask] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// 將建立的日期資料夾，依第一次出現的順序
    #[must_use]
    pub fn folders(&self) -> Vec<&str> {
        let mut folders: Vec<&str> = Vec::new();
        for task in &self.tasks {
            let date = task.adjusted_at.date();
            if !folders.contains(&date) {
                folders.push(date);
            }
        }
        folders
    }

    /// 找出計畫內指向相同目標路徑的工作
    ///
    /// 計畫本身不去重，這裡只負責偵測
    #[must_use]
    pub fn collisions(&self) -> Vec<Collision> {
        let mut order: Vec<PathBuf> = Vec::new();
        let mut grouped: HashMap<PathBuf, Vec<String>> = HashMap::new();

        for task in &self.tasks {
            let destination = task.destination_path();
            let names = grouped.entry(destination.clone()).or_default();
            if names.is_empty() {
                order.push(destination);
            }
            names.push(task.original_name.clone());
        }

        order
            .into_iter()
            .filter_map(|destination| {
                let original_names = grouped.remove(&destination)?;
                (original_names.len() > 1).then_some(Collision {
                    destination,
                    original_names,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn copy_jobs(&self) -> Vec<CopyJob> {
        self.tasks.iter().map(FileTask::copy_job).collect()
    }
}

/// 建立整理計畫
///
/// 維持輸入順序；檔名不符合拍攝命名規則的檔案直接排除
#[must_use]
pub fn build_plan(
    files: &[PathBuf],
    destination_root: &Path,
    suffix: &str,
    adjustment: Option<AdjustmentSpec>,
) -> CapturePlan {
    let offset = adjustment.map(|spec| spec.signed_offset_seconds());

    let tasks = files
        .iter()
        .filter_map(|path| build_task(path, destination_root, suffix, offset))
        .collect();

    CapturePlan {
        tasks,
        destination_root: destination_root.to_path_buf(),
        suffix: suffix.to_string(),
    }
}

fn build_task(
    path: &Path,
    destination_root: &Path,
    suffix: &str,
    offset: Option<i64>,
) -> Option<FileTask> {
    let original_name = path.file_name()?.to_str()?.to_string();
    let capture_name = CaptureName::parse(&original_name)?;

    let captured_at = capture_name.timestamp.clone();
    let adjusted_at = match offset {
        Some(seconds) => adjust(&captured_at, seconds),
        None => captured_at.clone(),
    };

    let destination_folder = destination_root.join(adjusted_at.date());
    let destination_name = capture_name.rename(&adjusted_at, suffix);

    Some(FileTask {
        original_name,
        source_path: path.to_path_buf(),
        captured_at,
        adjusted_at,
        destination_folder,
        destination_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Direction;

    fn sources(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| Path::new("/src").join(n)).collect()
    }

    #[test]
    fn test_suffix_without_adjustment() {
        let plan = build_plan(
            &sources(&["PXL_20230101_120000123.mp4"]),
            Path::new("/dest"),
            "trip",
            None,
        );

        assert_eq!(plan.len(), 1);
        let task = &plan.tasks()[0];
        assert_eq!(task.destination_name, "PXL_20230101_120000123_trip.mp4");
        assert_eq!(task.destination_folder, Path::new("/dest/20230101"));
        assert_eq!(task.captured_at, task.adjusted_at);
        assert_eq!(task.source_path, Path::new("/src/PXL_20230101_120000123.mp4"));
    }

    #[test]
    fn test_non_matching_files_are_excluded() {
        let plan = build_plan(
            &sources(&["notes.txt", "PXL_20230101_120000123.jpg", "IMG_0001.JPG"]),
            Path::new("/dest"),
            "",
            None,
        );

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.tasks()[0].original_name, "PXL_20230101_120000123.jpg");
    }

    #[test]
    fn test_adjustment_moves_file_into_next_day_folder() {
        let adjustment = AdjustmentSpec {
            direction: Direction::Add,
            hours: 1,
            minutes: 0,
            seconds: 0,
        };
        let plan = build_plan(
            &sources(&["PXL_20230131_233000555.jpg"]),
            Path::new("/dest"),
            "",
            Some(adjustment),
        );

        let task = &plan.tasks()[0];
        assert_eq!(task.captured_at.date(), "20230131");
        assert_eq!(task.destination_folder, Path::new("/dest/20230201"));
        assert_eq!(task.destination_name, "PXL_20230201_003000555.jpg");
    }

    #[test]
    fn test_reduce_adjustment_with_suffix() {
        let adjustment = AdjustmentSpec {
            direction: Direction::Reduce,
            hours: 0,
            minutes: 0,
            seconds: 1,
        };
        let plan = build_plan(
            &sources(&["PXL_20240301_000000000.LS.mp4"]),
            Path::new("/dest"),
            "fix",
            Some(adjustment),
        );

        let task = &plan.tasks()[0];
        assert_eq!(task.destination_folder, Path::new("/dest/20240229"));
        assert_eq!(task.destination_name, "PXL_20240229_235959000_fix.LS.mp4");
    }

    #[test]
    fn test_order_is_preserved_and_folders_distinct() {
        let plan = build_plan(
            &sources(&[
                "PXL_20230102_080000000.jpg",
                "PXL_20230101_080000000.jpg",
                "PXL_20230102_090000000.jpg",
            ]),
            Path::new("/dest"),
            "",
            None,
        );

        let names: Vec<&str> = plan
            .tasks()
            .iter()
            .map(|t| t.original_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "PXL_20230102_080000000.jpg",
                "PXL_20230101_080000000.jpg",
                "PXL_20230102_090000000.jpg",
            ]
        );
        assert_eq!(plan.folders(), vec!["20230102", "20230101"]);
    }

    #[test]
    fn test_identical_targets_are_kept_as_separate_tasks() {
        // 兩個檔案校正後得到相同目標路徑：計畫保留兩筆工作，不做去重
        let adjustment = AdjustmentSpec {
            direction: Direction::Add,
            hours: 0,
            minutes: 0,
            seconds: 1,
        };
        let plan = build_plan(
            &[
                PathBuf::from("/src/a/PXL_20230101_120000123.jpg"),
                PathBuf::from("/src/b/PXL_20230101_120000123.jpg"),
            ],
            Path::new("/dest"),
            "",
            Some(adjustment),
        );

        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.tasks()[0].destination_path(),
            plan.tasks()[1].destination_path()
        );

        let collisions = plan.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(
            collisions[0].destination,
            Path::new("/dest/20230101/PXL_20230101_120001123.jpg")
        );
        assert_eq!(collisions[0].original_names.len(), 2);
    }

    #[test]
    fn test_no_collisions_for_distinct_targets() {
        let plan = build_plan(
            &sources(&["PXL_20230101_120000123.jpg", "PXL_20230101_120000124.jpg"]),
            Path::new("/dest"),
            "",
            None,
        );
        assert!(plan.collisions().is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_plan() {
        let plan = build_plan(&[], Path::new("/dest"), "trip", None);
        assert!(plan.is_empty());
        assert!(plan.folders().is_empty());
        assert_eq!(plan.suffix(), "trip");
        assert_eq!(plan.destination_root(), Path::new("/dest"));
    }

    #[test]
    fn test_copy_jobs_follow_tasks() {
        let plan = build_plan(
            &sources(&["PXL_20230101_120000123.jpg"]),
            Path::new("/dest"),
            "",
            None,
        );
        let jobs = plan.copy_jobs();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].source, Path::new("/src/PXL_20230101_120000123.jpg"));
        assert_eq!(
            jobs[0].destination,
            Path::new("/dest/20230101/PXL_20230101_120000123.jpg")
        );
    }
}
