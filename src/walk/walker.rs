//! DirectoryWalker - breadth-first traversal that builds a TraversalReport

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ListingFailure, WalkError};
use crate::file_type::{file_type_key, is_hidden};
use crate::stats::{FileRecord, QuickScan, TraversalNode, TraversalReport};

use super::config::WalkerConfig;
use super::progress::{ProgressSink, WalkProgress};
use super::structure::{StructureNode, build_structure};
use super::utils::resolve_root;

/// How a directory entry is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Folder,
    File,
    /// Symlink to a directory, seen while not following links.
    LinkedFolder,
}

/// Immediate contents of one directory after hidden filtering.
#[derive(Debug, Default)]
struct Listing {
    folders: Vec<OsString>,
    files: Vec<OsString>,
    linked_folders: usize,
}

/// Walks a directory tree level by level.
///
/// Each call owns its own queue and counters, so one walker can be reused
/// for any number of walks.
pub struct DirectoryWalker {
    config: WalkerConfig,
    progress: Option<ProgressSink>,
}

impl DirectoryWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Send best-effort progress updates after every directory.
    pub fn with_progress(mut self, sink: ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk the tree under `root`.
    ///
    /// Fails only if `root` is missing or not a directory. Directories that
    /// cannot be listed are recorded with zero counts and their error.
    pub fn walk(&self, root: &Path) -> Result<TraversalReport, WalkError> {
        let root = resolve_root(root)?;
        let mut report = TraversalReport::new(root.clone());
        let mut queue: VecDeque<(PathBuf, usize, Option<usize>)> = VecDeque::new();
        queue.push_back((root, 0, None));

        while let Some((dir, level, parent)) = queue.pop_front() {
            // Children are enqueued unconditionally, so the limit is applied here
            if self.config.beyond_max_depth(level) {
                continue;
            }

            let index = report.node_count;
            let mut node = TraversalNode::new(dir, level, parent);

            let listing = self.list_directory(&node.path);
            if let Err(err) = &listing {
                warn!(path = %node.path.display(), error = %err, "cannot list directory");
            }
            self.apply_listing(&mut node, listing);
            if node.is_unreadable() {
                report.unreadable_count += 1;
            }

            debug!(
                path = %node.path.display(),
                level,
                files = node.file_count,
                folders = node.folders.len(),
                linked_folders = node.linked_folders,
                "visited directory"
            );

            report.totals.add_node(&node.file_types);
            for child in node.folder_paths() {
                queue.push_back((child, level + 1, Some(index)));
            }
            report.node_count += 1;

            if let Some(sink) = &self.progress {
                sink.offer(WalkProgress {
                    dirs_visited: report.node_count,
                    files_counted: report.total_files(),
                    unreadable: report.unreadable_count,
                    current_path: node.path.clone(),
                });
            }

            if self.config.keep_nodes {
                report.nodes.push(node);
            }
        }

        info!(
            root = %report.root.display(),
            directories = report.node_count,
            files = report.total_files(),
            unreadable = report.unreadable_count,
            "walk finished"
        );
        Ok(report)
    }

    /// Scan only the root directory, without descending.
    pub fn quick_scan(&self, root: &Path) -> Result<QuickScan, WalkError> {
        let config = self.config.clone().with_max_depth(Some(0)).with_keep_nodes(true);
        let report = DirectoryWalker::new(config).walk(root)?;
        let folder_count = report.nodes.first().map_or(0, TraversalNode::folder_count);
        Ok(QuickScan {
            folder_count,
            file_count: report.total_files(),
            file_types: report.totals.file_types().clone(),
        })
    }

    /// Walk `root` recording file names and assemble the nested structure.
    pub fn structure(&self, root: &Path) -> Result<StructureNode, WalkError> {
        let mut config = self.config.clone().with_keep_nodes(true);
        config.record_files = true;
        let report = DirectoryWalker::new(config).walk(root)?;
        Ok(build_structure(&report))
    }

    /// List and partition one directory. Any error, including one raised
    /// part-way through the listing, fails the whole directory.
    fn list_directory(&self, dir: &Path) -> io::Result<Listing> {
        let mut listing = Listing::default();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if !self.config.include_hidden && is_hidden(&name.to_string_lossy()) {
                continue;
            }
            match self.classify(&entry) {
                EntryKind::Folder => listing.folders.push(name),
                EntryKind::File => listing.files.push(name),
                EntryKind::LinkedFolder => listing.linked_folders += 1,
            }
        }
        Ok(listing)
    }

    /// Decide how an entry is counted. Entries whose type cannot be read
    /// count as files.
    fn classify(&self, entry: &DirEntry) -> EntryKind {
        if self.config.follow_symlinks {
            return if entry.path().is_dir() {
                EntryKind::Folder
            } else {
                EntryKind::File
            };
        }
        match entry.file_type() {
            Ok(t) if t.is_dir() => EntryKind::Folder,
            Ok(t) if t.is_symlink() && entry.path().is_dir() => EntryKind::LinkedFolder,
            _ => EntryKind::File,
        }
    }

    /// Fill `node` from a listing. A failed listing leaves the node empty
    /// with the failure attached.
    fn apply_listing(&self, node: &mut TraversalNode, listing: io::Result<Listing>) {
        let listing = match listing {
            Ok(listing) => listing,
            Err(err) => {
                node.error = Some(ListingFailure::from(&err));
                return;
            }
        };

        for name in listing.files {
            let name = name.to_string_lossy().into_owned();
            let key = file_type_key(&name);
            node.file_count += 1;
            if self.config.record_files {
                node.files.push(FileRecord {
                    name,
                    file_type: key.clone(),
                });
            }
            node.file_types.record(key);
        }
        node.folders = listing
            .folders
            .iter()
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        node.folder_names = listing.folders;
        node.linked_folders = listing.linked_folders;
    }
}
