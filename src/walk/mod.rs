//! Breadth-first directory walking
//!
//! `DirectoryWalker` visits a tree level by level and produces a
//! `TraversalReport`. The same walk also backs the single-level quick scan
//! and the nested structure view.

mod config;
mod progress;
mod structure;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use progress::{PROGRESS_CHANNEL_CAPACITY, ProgressSink, WalkProgress, progress_channel};
pub use structure::{StructureNode, build_structure};
pub use utils::{dir_name, normalize_lexically, resolve_root};
pub use walker::DirectoryWalker;
