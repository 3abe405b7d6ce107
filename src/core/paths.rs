//! Path handling utilities
//!
//! Relative patterns are anchored at the current working directory;
//! basenames lose only their final extension.

use std::path::{Path, PathBuf};

/// Make a path absolute against the current working directory.
/// Absolute inputs are returned unchanged.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Basename of a file with its final extension removed.
///
/// Only the text after the last '.' is dropped: "archive.tar.gz" keeps
/// "archive.tar", and a dotfile like ".config" keeps its whole name.
pub fn basename_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
