//! Validation Engine
//!
//! Board rules, separated from parsing and reporting.

pub mod completion;
pub mod engine;
pub mod line;
pub mod uniqueness;
pub mod visibility;

pub use engine::{
    check_grid, check_skyscrapers, validate_file, validate_grid, ValidationResult, Violation,
};
pub use line::{left_to_right_check, scan_visible, visible_count, Line, LineRef};

pub use completion::is_complete;
pub use uniqueness::rows_unique;
pub use visibility::{columns_valid, rows_visible};
