//! Error types for directory walks.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors that stop a walk before it starts.
///
/// Failures on directories below the root never surface here; they are
/// recorded on the node as a [`ListingFailure`].
#[derive(Debug, Error)]
pub enum WalkError {
    /// The root path does not exist.
    #[error("cannot access '{path}': No such file or directory")]
    RootNotFound { path: PathBuf },

    /// The root path exists but is not a directory.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// Any other I/O failure while resolving the root.
    #[error("cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// Classify an I/O error raised while resolving the root.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::RootNotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Why a directory could not be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingErrorKind {
    PermissionDenied,
    /// The directory vanished between discovery and listing.
    NotFound,
    /// Anything else the OS reported. Absorbed the same way as the others.
    Other,
}

/// A directory listing that failed. The node is kept with zero counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ListingFailure {
    pub kind: ListingErrorKind,
    pub message: String,
}

impl From<&io::Error> for ListingFailure {
    fn from(err: &io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::PermissionDenied => ListingErrorKind::PermissionDenied,
            io::ErrorKind::NotFound => ListingErrorKind::NotFound,
            _ => ListingErrorKind::Other,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}
