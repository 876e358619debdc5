//! Skyscrapers Board Checker
//!
//! Validates finished Skyscrapers boards: a square grid of building heights
//! framed by visibility hints.
//!
//! This library provides:
//! - Board file reading and parsing
//! - Completion, uniqueness and visibility checks
//! - Configuration management for the command-line driver

pub mod config;
pub mod error;
pub mod parser;
pub mod reader;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::GridError;
pub use parser::{parse_grid, Cell, Grid, Markers, Side};
pub use reader::{read_grid, read_rows};
pub use validation::{check_grid, check_skyscrapers, validate_grid, ValidationResult, Violation};
