//! 功能元件模組
//!
//! 每個子模組實現一個獨立的功能，包含主要邏輯和專用工具

pub mod capture_organizer;
mod outcome;
pub mod suffix_copier;

pub use capture_organizer::CaptureOrganizer;
pub use outcome::RunOutcome;
pub use suffix_copier::SuffixCopier;
