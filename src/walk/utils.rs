//! Shared utility functions for directory walks

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::WalkError;

/// Resolve `.` and `..` segments and trailing separators without touching
/// the filesystem. `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Make `root` absolute, normalize it, and check that it is a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, WalkError> {
    let absolute = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| WalkError::io(root, e))?
            .join(root)
    };
    let normalized = normalize_lexically(&absolute);

    let metadata = fs::metadata(&normalized).map_err(|e| WalkError::io(&normalized, e))?;
    if !metadata.is_dir() {
        return Err(WalkError::NotADirectory { path: normalized });
    }
    Ok(normalized)
}

/// Get the display name of a directory, falling back to the full path for
/// roots such as `/`.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
