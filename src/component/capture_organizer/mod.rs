//! 依拍攝時間整理元件
//!
//! 解析 `PXL_` 檔名中的拍攝時間，可選擇校正時間與加上後綴，
//! 再依校正後的日期複製到對應資料夾

mod gate;
mod main;
mod planner;
mod prompt;

pub use gate::{GateState, is_affirmative};
pub use main::CaptureOrganizer;
pub use planner::{CapturePlan, Collision, FileTask, build_plan};
pub use prompt::{Ask, DIRECTION_ITEMS, DialoguerAsk, collect_adjustment, parse_count};
