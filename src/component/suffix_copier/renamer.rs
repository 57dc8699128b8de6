//! 後綴檔名產生
//!
//! 相機原始檔名 `P<數字>.JPG` 在副檔名前加上 `_<後綴>`

use crate::tools::CopyJob;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static REGEX_CAMERA_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^P[0-9]+\.JPG$").expect("Invalid regex"));

/// 檔名是否為相機原始 JPG 命名
#[must_use]
pub fn is_camera_file_name(file_name: &str) -> bool {
    REGEX_CAMERA_NAME.is_match(file_name)
}

/// 在副檔名前加上後綴，後綴為空時維持原檔名
#[must_use]
pub fn with_suffix(file_name: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return file_name.to_string();
    }

    match file_name.rfind('.') {
        Some(dot) if dot > 0 => {
            let (stem, extension) = file_name.split_at(dot);
            format!("{stem}_{suffix}{extension}")
        }
        _ => format!("{file_name}_{suffix}"),
    }
}

/// 建立複製工作，所有檔案都放在同一個目標資料夾
#[must_use]
pub fn build_jobs(files: &[PathBuf], destination: &Path, suffix: &str) -> Vec<CopyJob> {
    files
        .iter()
        .filter_map(|source| {
            let file_name = source.file_name()?.to_str()?;
            Some(CopyJob {
                source: source.clone(),
                destination: destination.join(with_suffix(file_name, suffix)),
            })
        })
        .collect()
}
