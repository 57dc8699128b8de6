use crate::config::DiscoveryOrder;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 掃描目錄第一層的一般檔案，只保留檔名符合條件者
///
/// `DiscoveryOrder::FileSystem` 依作業系統列出的順序，不保證跨平台一致
pub fn scan_matching_files<F>(
    directory: &Path,
    order: DiscoveryOrder,
    predicate: F,
) -> Result<Vec<PathBuf>>
where
    F: Fn(&str) -> bool,
{
    let mut walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    if order == DiscoveryOrder::Lexicographic {
        walker = walker.sort_by_file_name();
    }

    let files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_str().is_some_and(&predicate))
        .map(walkdir::DirEntry::into_path)
        .collect();

    debug!(
        "掃描 {} 完成，符合條件的檔案 {} 個",
        directory.display(),
        files.len()
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_scan_filters_by_predicate() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("keep_a.jpg"), "a").unwrap();
        fs::write(temp_dir.path().join("drop.jpg"), "b").unwrap();

        let files =
            scan_matching_files(temp_dir.path(), DiscoveryOrder::FileSystem, |name| {
                name.starts_with("keep")
            })
            .unwrap();

        assert_eq!(names(&files), vec!["keep_a.jpg"]);
    }

    #[test]
    fn test_scan_skips_directories_and_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("keep_dir")).unwrap();
        fs::write(temp_dir.path().join("keep_dir/keep_nested.jpg"), "n").unwrap();
        fs::write(temp_dir.path().join("keep_top.jpg"), "t").unwrap();

        let files =
            scan_matching_files(temp_dir.path(), DiscoveryOrder::FileSystem, |name| {
                name.starts_with("keep")
            })
            .unwrap();

        assert_eq!(names(&files), vec!["keep_top.jpg"]);
    }

    #[test]
    fn test_scan_lexicographic_order() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["c.jpg", "a.jpg", "b.jpg"] {
            fs::write(temp_dir.path().join(name), name).unwrap();
        }

        let files =
            scan_matching_files(temp_dir.path(), DiscoveryOrder::Lexicographic, |_| true)
                .unwrap();

        assert_eq!(names(&files), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files =
            scan_matching_files(temp_dir.path(), DiscoveryOrder::FileSystem, |_| true).unwrap();
        assert!(files.is_empty());
    }
}
