//! 拍攝時間校正模組
//!
//! 以秒為單位平移拍攝時間，日期依公曆正確進位（不處理時區與閏秒）

use super::capture_name::CaptureTimestamp;
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use log::warn;
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;

/// 校正方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Add,
    Reduce,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "增加"),
            Self::Reduce => write!(f, "減少"),
        }
    }
}

/// 時間校正設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjustmentSpec {
    pub direction: Direction,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl AdjustmentSpec {
    /// 帶正負號的總位移秒數
    #[must_use]
    pub fn signed_offset_seconds(&self) -> i64 {
        let total = self
            .hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds);
        let total = i64::try_from(total).unwrap_or(i64::MAX);

        match self.direction {
            Direction::Add => total,
            Direction::Reduce => -total,
        }
    }
}

/// 將拍攝時間平移指定秒數，回傳新的時間戳記
///
/// 毫秒部分不變。超出範圍的欄位（例如 13 月）依日曆規則往後折算；
/// 無法表示的結果（包含西元 0 到 9999 年以外）會記錄警告並原樣回傳
#[must_use]
pub fn adjust(timestamp: &CaptureTimestamp, offset_seconds: i64) -> CaptureTimestamp {
    let shifted = to_date_time(timestamp).and_then(|date_time| {
        let date_time = date_time.checked_add_signed(TimeDelta::try_seconds(offset_seconds)?)?;
        from_date_time(&date_time, timestamp.sub_seconds())
    });

    match shifted {
        Some(adjusted) => adjusted,
        None => {
            warn!(
                "無法校正時間 {}_{}（位移 {} 秒），保留原值",
                timestamp.date(),
                timestamp.time(),
                offset_seconds
            );
            timestamp.clone()
        }
    }
}

fn to_date_time(timestamp: &CaptureTimestamp) -> Option<NaiveDateTime> {
    let date = timestamp.date();
    let time = timestamp.time();
    let split = date.len().checked_sub(4)?;

    let year: i32 = date[..split].parse().ok()?;
    let month: i64 = date[split..split + 2].parse().ok()?;
    let day: i64 = date[split + 2..].parse().ok()?;

    let hours: i64 = time.get(0..2)?.parse().ok()?;
    let minutes: i64 = time.get(2..4)?.parse().ok()?;
    let seconds: i64 = time.get(4..6)?.parse().ok()?;

    // 月份先折算進年份，其餘欄位以秒數累加到當月一日
    let month_index = month - 1;
    let year = year.checked_add(i32::try_from(month_index.div_euclid(12)).ok()?)?;
    let month = u32::try_from(month_index.rem_euclid(12) + 1).ok()?;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    let elapsed = (day - 1) * SECONDS_PER_DAY + hours * 3600 + minutes * 60 + seconds;

    first_of_month.checked_add_signed(TimeDelta::try_seconds(elapsed)?)
}

// 年份超過四位數或為負數時不符合 8 位數日期
fn from_date_time(date_time: &NaiveDateTime, sub_seconds: &str) -> Option<CaptureTimestamp> {
    CaptureTimestamp::new(
        &format!(
            "{:04}{:02}{:02}",
            date_time.year(),
            date_time.month(),
            date_time.day()
        ),
        &format!(
            "{:02}{:02}{:02}",
            date_time.hour(),
            date_time.minute(),
            date_time.second()
        ),
        sub_seconds,
    )
}
