//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled with the `test-utils` feature, for
//! integration tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a balanced tree: `width` folders per level, `depth` levels
    /// deep, `files_per_dir` files in every folder cycling through a few
    /// extensions.
    pub fn populate(&self, width: usize, depth: usize, files_per_dir: usize) {
        const EXTENSIONS: [&str; 4] = ["rs", "md", "txt", "json"];

        let mut level: Vec<PathBuf> = vec![self.dir.path().to_path_buf()];
        for d in 0..=depth {
            let mut next = Vec::new();
            for dir in &level {
                for f in 0..files_per_dir {
                    let ext = EXTENSIONS[f % EXTENSIONS.len()];
                    fs::write(dir.join(format!("file_{}.{}", f, ext)), "x")
                        .expect("Failed to write file");
                }
                if d < depth {
                    for w in 0..width {
                        let child = dir.join(format!("dir_{}", w));
                        fs::create_dir(&child).expect("Failed to create dir");
                        next.push(child);
                    }
                }
            }
            level = next;
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
