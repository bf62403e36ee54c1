//! Output formatting module
//!
//! Provides terminal output with colors and JSON export.

pub mod json;
pub mod terminal;

pub use json::print_json;
pub use terminal::{create_progress_bar, print_scan_outcome, print_scan_summary, print_success};
