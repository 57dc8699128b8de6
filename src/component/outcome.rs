use crate::tools::CopyResult;

/// 一次執行的結束狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 已執行複製
    Completed(CopyResult),
    /// 沒有符合命名規則的檔案
    NoMatchingFiles,
    /// 使用者在確認步驟取消
    Cancelled,
}
