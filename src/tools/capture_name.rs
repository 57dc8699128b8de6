//! 拍攝檔名解析模組
//!
//! 從 `PXL_YYYYMMDD_HHMMSSmmm...` 形式的檔名中取出拍攝日期與時間

use regex::Regex;
use std::sync::LazyLock;

/// 拍攝檔名固定前綴
pub const CAPTURE_PREFIX: &str = "PXL_";

static REGEX_CAPTURE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PXL_([0-9]{8})_([0-9]{6})([0-9]{3})").expect("Invalid regex"));

static REGEX_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("Invalid regex"));

static REGEX_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Invalid regex"));

static REGEX_SUB_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("Invalid regex"));

/// 拍攝時間戳記
///
/// 只能透過驗證過的建構方式產生，毫秒部分原樣保留
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaptureTimestamp {
    date: String,
    time: String,
    sub_seconds: String,
}

impl CaptureTimestamp {
    /// 以日期（8 位數）、時間（6 位數）、毫秒（3 位數）建立時間戳記
    ///
    /// 任一欄位位數不符時回傳 `None`
    #[must_use]
    pub fn new(date: &str, time: &str, sub_seconds: &str) -> Option<Self> {
        if !REGEX_DATE.is_match(date)
            || !REGEX_TIME.is_match(time)
            || !REGEX_SUB_SECONDS.is_match(sub_seconds)
        {
            return None;
        }

        Some(Self {
            date: date.to_string(),
            time: time.to_string(),
            sub_seconds: sub_seconds.to_string(),
        })
    }

    /// `YYYYMMDD`
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// `HHMMSS`
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn sub_seconds(&self) -> &str {
        &self.sub_seconds
    }
}

/// 解析後的拍攝檔名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureName {
    /// 檔名中的拍攝時間
    pub timestamp: CaptureTimestamp,
    /// 時間區塊之後的剩餘部分（例如 `.mp4`、`.NIGHT.jpg`）
    pub tail: String,
}

impl CaptureName {
    /// 解析檔名，不符合命名規則時回傳 `None`
    #[must_use]
    pub fn parse(file_name: &str) -> Option<Self> {
        let captures = REGEX_CAPTURE_NAME.captures(file_name)?;
        let whole = captures.get(0)?;

        let timestamp = CaptureTimestamp::new(
            captures.get(1)?.as_str(),
            captures.get(2)?.as_str(),
            captures.get(3)?.as_str(),
        )?;

        Some(Self {
            timestamp,
            tail: file_name[whole.end()..].to_string(),
        })
    }

    /// 以新的時間戳記產生檔名，後綴不為空時接在時間區塊後面
    #[must_use]
    pub fn rename(&self, adjusted: &CaptureTimestamp, suffix: &str) -> String {
        let suffix_part = if suffix.is_empty() {
            String::new()
        } else {
            format!("_{suffix}")
        };

        format!(
            "{}{}_{}{}{}{}",
            CAPTURE_PREFIX,
            adjusted.date(),
            adjusted.time(),
            adjusted.sub_seconds(),
            suffix_part,
            self.tail
        )
    }
}

/// 從檔名取出拍攝時間
#[must_use]
pub fn parse_capture_timestamp(file_name: &str) -> Option<CaptureTimestamp> {
    CaptureName::parse(file_name).map(|name| name.timestamp)
}

/// 檔名是否符合拍攝命名規則
#[must_use]
pub fn is_capture_file_name(file_name: &str) -> bool {
    REGEX_CAPTURE_NAME.is_match(file_name)
}
