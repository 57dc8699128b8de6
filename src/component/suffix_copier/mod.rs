//! 加上後綴複製元件
//!
//! 將 `P<數字>.JPG` 相機檔案複製到目標資料夾，並在副檔名前加上後綴

mod main;
mod renamer;

pub use main::SuffixCopier;
pub use renamer::{build_jobs, is_camera_file_name, with_suffix};
