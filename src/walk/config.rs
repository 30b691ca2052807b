//! Configuration types for directory walks

/// Configuration for walk behavior.
///
/// The root path is passed to each walk call; everything here is fixed for
/// the lifetime of a [`DirectoryWalker`](super::DirectoryWalker).
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Deepest level that is listed. `None` walks the whole tree.
    /// Directories below it still show up in their parent's folder list.
    pub max_depth: Option<usize>,
    /// Include entries whose name starts with a dot.
    pub include_hidden: bool,
    /// Classify symlinks by their target. Off by default, in which case a
    /// symlink is never descended into: links to directories are tallied
    /// separately and other links count as files.
    pub follow_symlinks: bool,
    /// Keep the per-directory node list in the report.
    pub keep_nodes: bool,
    /// Capture individual file names (needed for the structure view).
    pub record_files: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            include_hidden: false,
            follow_symlinks: false,
            keep_nodes: true,
            record_files: false,
        }
    }
}

impl WalkerConfig {
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_keep_nodes(mut self, keep: bool) -> Self {
        self.keep_nodes = keep;
        self
    }

    /// Check whether a dequeued directory lies beyond the depth limit.
    pub fn beyond_max_depth(&self, level: usize) -> bool {
        self.max_depth.is_some_and(|max| level > max)
    }
}
