//! Directory statistics collected by a walk
//!
//! This module holds the result types of a traversal: per-directory node
//! records, the whole-tree aggregate, and the derived queries computed from
//! a finished report (top file types, per-level slices).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::ListingFailure;

/// File-type key to count, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileTypeHistogram(IndexMap<String, usize>);

impl FileTypeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file of the given type.
    pub fn record(&mut self, key: String) {
        *self.0.entry(key).or_insert(0) += 1;
    }

    /// Add every count of `other` into this histogram.
    pub fn merge(&mut self, other: &FileTypeHistogram) {
        for (key, count) in &other.0 {
            *self.0.entry(key.clone()).or_insert(0) += count;
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.get(key).copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The `n` most common keys, by descending count.
    /// Ties keep first-encounter order.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        // sort_by is stable, so equal counts stay in insertion order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for FileTypeHistogram {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for (key, count) in iter {
            *histogram.0.entry(key.into()).or_insert(0) += count;
        }
        histogram
    }
}

/// Whole-tree totals.
///
/// Counts only enter through [`AggregateStats::add_node`], so the histogram
/// always sums to `total_files`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    total_files: usize,
    file_types: FileTypeHistogram,
}

impl AggregateStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one directory's histogram into the totals.
    pub fn add_node(&mut self, node_types: &FileTypeHistogram) {
        self.total_files += node_types.total();
        self.file_types.merge(node_types);
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    pub fn file_types(&self) -> &FileTypeHistogram {
        &self.file_types
    }
}

/// A single file captured when the walker records file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
}

/// One directory visited during a walk.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalNode {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Depth below the root; the root is 0.
    pub level: usize,
    /// Index of the parent in the report's node list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,
    /// Subfolder names in listing order.
    pub folders: Vec<String>,
    /// The same names as listed, for building child paths.
    #[serde(skip)]
    pub(crate) folder_names: Vec<OsString>,
    /// Symlinks to directories that were not followed. They are neither
    /// folders nor files.
    #[serde(skip_serializing_if = "is_zero")]
    pub linked_folders: usize,
    pub file_count: usize,
    pub file_types: FileTypeHistogram,
    /// File names in listing order, only filled when recording files.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileRecord>,
    /// Set when the directory could not be listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ListingFailure>,
}

impl TraversalNode {
    pub(crate) fn new(path: PathBuf, level: usize, parent: Option<usize>) -> Self {
        Self {
            path,
            level,
            parent,
            folders: Vec::new(),
            folder_names: Vec::new(),
            linked_folders: 0,
            file_count: 0,
            file_types: FileTypeHistogram::new(),
            files: Vec::new(),
            error: None,
        }
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn is_unreadable(&self) -> bool {
        self.error.is_some()
    }

    /// Paths of the subfolders, in the same order as `folders`.
    pub fn folder_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.folder_names.iter().map(|name| self.path.join(name))
    }
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Serialize a path as text, replacing bytes that are not valid UTF-8.
pub(crate) fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

/// Result of one walk.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub root: PathBuf,
    #[serde(flatten)]
    pub totals: AggregateStats,
    /// Directories visited, whether or not `nodes` was kept.
    pub node_count: usize,
    /// Directories that could not be listed.
    pub unreadable_count: usize,
    /// Visited directories in breadth-first order. Empty when the walker
    /// was configured not to keep them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<TraversalNode>,
}

impl TraversalReport {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            totals: AggregateStats::new(),
            node_count: 0,
            unreadable_count: 0,
            nodes: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn total_files(&self) -> usize {
        self.totals.total_files()
    }

    pub fn file_types(&self) -> &FileTypeHistogram {
        self.totals.file_types()
    }

    pub fn top_file_types(&self, n: usize) -> Vec<(&str, usize)> {
        self.totals.file_types().top(n)
    }

    /// Nodes at exactly `level`. Breadth-first order keeps them contiguous.
    pub fn nodes_at_level(&self, level: usize) -> &[TraversalNode] {
        let start = self.nodes.partition_point(|n| n.level < level);
        let end = self.nodes.partition_point(|n| n.level <= level);
        &self.nodes[start..end]
    }

    /// Deepest level reached, if any node was kept.
    pub fn max_level(&self) -> Option<usize> {
        self.nodes.last().map(|n| n.level)
    }
}

/// Non-recursive scan of a single directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuickScan {
    pub folder_count: usize,
    pub file_count: usize,
    pub file_types: FileTypeHistogram,
}
