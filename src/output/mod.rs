//! Report formatting and display
//!
//! Rendering is kept apart from the walker, which only produces data.
//!
//! # Module Structure
//!
//! - `config` - Output configuration and verbosity
//! - `utils` - Shared helpers (indentation, folder name layout, numbers)
//! - `tree` - Detailed per-directory formatter and quick scan output
//! - `summary` - Whole-tree totals block
//! - `json` - JSON output

mod config;
mod json;
mod summary;
mod tree;
mod utils;

pub use config::{OutputConfig, Verbosity};
pub use json::{print_json, to_json_string};
pub use summary::write_summary;
pub use tree::{TreeFormatter, write_quick_scan};
pub use utils::{color_choice, folder_lines, format_number};
