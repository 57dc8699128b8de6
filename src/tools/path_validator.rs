use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}

/// 檔名後綴只能是單一檔名片段，不可包含路徑分隔符號或 `..`
pub fn validate_file_name_suffix(suffix: &str) -> Result<()> {
    if suffix.contains(['/', '\\', '\0']) || suffix.contains("..") {
        bail!("後綴不可包含路徑分隔符號或 \"..\": {suffix}");
    }
    Ok(())
}
