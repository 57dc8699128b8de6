mod capture_name;
mod clock_adjuster;
mod file_copier;
mod file_scanner;
mod path_validator;

pub use capture_name::{
    CAPTURE_PREFIX, CaptureName, CaptureTimestamp, is_capture_file_name, parse_capture_timestamp,
};
pub use clock_adjuster::{AdjustmentSpec, Direction, adjust};
pub use file_copier::{CopyJob, CopyResult, copy_files, existing_targets};
pub use file_scanner::scan_matching_files;
pub use path_validator::{
    ensure_directory_exists, validate_directory_exists, validate_file_name_suffix,
};
