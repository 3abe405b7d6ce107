//! Pattern resolution using glob
//!
//! Expands a single path pattern into the regular files it matches.
//! A pattern that names a directory is searched recursively, like the
//! default pattern does for the default directory.

use anyhow::{Context, Result};
use glob::{glob_with, MatchOptions};
use std::path::{Path, PathBuf};

/// Expand one pattern into the matching regular files.
///
/// Matches are returned in the order the glob iterator yields them
/// (lexicographic within each directory). Directories matched by the
/// expansion are skipped; a pattern matching nothing yields an empty
/// list and is not an error. Wildcards never match a leading dot, so
/// hidden files must be named literally.
pub fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    // A literal directory stands for everything below it.
    let expanded;
    let pattern = if Path::new(pattern).is_dir() {
        expanded = format!("{}/**/*", pattern.trim_end_matches('/'));
        expanded.as_str()
    } else {
        pattern
    };

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let paths = glob_with(pattern, options)
        .with_context(|| format!("Invalid glob pattern: {}", pattern))?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.with_context(|| format!("Error resolving pattern: {}", pattern))?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}
