//! Nested folder structure built from a flat breadth-first report

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ListingFailure;
use crate::stats::{FileRecord, TraversalReport, serialize_path_lossy};

use super::utils::dir_name;

/// One folder in the nested view.
///
/// Folders that were discovered but never listed (beyond the depth limit)
/// have `listed == false` and no contents.
#[derive(Debug, Clone, Serialize)]
pub struct StructureNode {
    pub name: String,
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub level: usize,
    pub listed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ListingFailure>,
    pub directories: Vec<StructureNode>,
    pub files: Vec<FileRecord>,
}

impl StructureNode {
    fn unlisted(name: String, path: PathBuf, level: usize) -> Self {
        Self {
            name,
            path,
            level,
            listed: false,
            error: None,
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Count files in this folder and every folder below it.
    pub fn total_files(&self) -> usize {
        self.files.len()
            + self
                .directories
                .iter()
                .map(StructureNode::total_files)
                .sum::<usize>()
    }
}

/// Assemble the nested view from a report whose nodes were kept.
///
/// Nodes are processed deepest-first so every child is complete before its
/// parent takes ownership of it.
pub fn build_structure(report: &TraversalReport) -> StructureNode {
    let nodes = &report.nodes;
    if nodes.is_empty() {
        return StructureNode::unlisted(dir_name(&report.root), report.root.clone(), 0);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    for (index, node) in nodes.iter().enumerate() {
        if let Some(parent) = node.parent {
            children[parent].push(index);
        }
    }

    let mut built: Vec<Option<StructureNode>> = vec![None; nodes.len()];
    for index in (0..nodes.len()).rev() {
        let node = &nodes[index];
        // Every folder of a listed node is enqueued in order, so its children
        // are either all recorded or all beyond the depth limit
        let expanded = children[index].len() == node.folders.len();
        let directories = node
            .folders
            .iter()
            .zip(node.folder_paths())
            .enumerate()
            .map(|(position, (name, path))| {
                let child = if expanded {
                    built[children[index][position]].take()
                } else {
                    None
                };
                child.unwrap_or_else(|| StructureNode::unlisted(name.clone(), path, node.level + 1))
            })
            .collect();

        built[index] = Some(StructureNode {
            name: dir_name(&node.path),
            path: node.path.clone(),
            level: node.level,
            listed: node.error.is_none(),
            error: node.error.clone(),
            directories,
            files: node.files.clone(),
        });
    }

    built[0]
        .take()
        .unwrap_or_else(|| StructureNode::unlisted(dir_name(&report.root), report.root.clone(), 0))
}
