//! dirtally - breadth-first directory statistics
//!
//! Walks a directory tree level by level and reports file counts and
//! file-type histograms per directory and for the whole tree.

pub mod error;
pub mod file_type;
pub mod output;
pub mod stats;
pub mod walk;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{ListingErrorKind, ListingFailure, WalkError};
pub use file_type::{NO_EXTENSION, file_type_key};
pub use output::{OutputConfig, TreeFormatter, Verbosity, print_json};
pub use stats::{AggregateStats, FileTypeHistogram, QuickScan, TraversalNode, TraversalReport};
pub use walk::{DirectoryWalker, StructureNode, WalkProgress, WalkerConfig, progress_channel};
