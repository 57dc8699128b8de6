//! 執行前確認關卡
//!
//! `Scanned → Previewed → Confirmed | Cancelled`，每次執行只決定一次

/// 確認關卡狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Scanned,
    Previewed,
    Confirmed,
    Cancelled,
}

impl GateState {
    /// 已顯示預覽
    #[must_use]
    pub const fn preview(self) -> Self {
        match self {
            Self::Scanned => Self::Previewed,
            other => other,
        }
    }

    /// 依使用者回應做出最終決定，只有預覽後的明確同意才會進入 `Confirmed`
    #[must_use]
    pub const fn decide(self, affirmative: bool) -> Self {
        match self {
            Self::Previewed if affirmative => Self::Confirmed,
            Self::Previewed => Self::Cancelled,
            other => other,
        }
    }

    #[must_use]
    pub const fn allows_execution(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// 回應是否為明確同意（`yes` / `y`，不分大小寫）
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
