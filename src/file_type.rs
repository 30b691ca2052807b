//! File-type key derivation
//!
//! Every file is grouped under a key built from its extension: the
//! lower-cased extension including the leading dot (`.txt`), or the
//! [`NO_EXTENSION`] sentinel when the name has none.

use std::ffi::OsStr;

/// Key used for files without an extension, including dotfiles such as
/// `.gitignore` whose only dot is a leading one.
pub const NO_EXTENSION: &str = "no-extension";

/// Compute the histogram key for a file name.
///
/// Leading dots never start an extension, so `.env` and `..bashrc` are
/// extensionless. The extension starts at the last dot after them:
/// `archive.tar.GZ` becomes `.gz`. A trailing dot yields `"."`.
pub fn file_type_key(name: &str) -> String {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(pos) => name[stem_start + pos..].to_lowercase(),
        None => NO_EXTENSION.to_string(),
    }
}

/// Same as [`file_type_key`] for a raw OS file name.
/// Non-UTF-8 names are converted lossily first.
pub fn file_type_key_os(name: &OsStr) -> String {
    file_type_key(&name.to_string_lossy())
}

/// Whether a directory entry name is hidden (starts with a dot).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
