//! Mapping file paths to domains and locating the project root.

use std::path::{Path, PathBuf};

use crate::config::{ConfigError, PROJECT_MARKER_FILE};

/// Domain of a source file: the first path segment after `marker`.
///
/// Both separator conventions are accepted. A path without the marker, or
/// with nothing after it, has no domain and is not subject to boundary checks.
pub fn extract_domain(file_path: &str, marker: &str) -> Option<String> {
    let normalized = file_path.replace('\\', "/");
    let marker = marker.replace('\\', "/");

    let start = normalized.find(&marker)? + marker.len();
    normalized[start..]
        .split('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Whether the path's extension is one of `extensions` (case-insensitive).
pub fn has_extension(file_path: &str, extensions: &[&str]) -> bool {
    Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Walk upward from `file_path` to the first directory holding `package.json`.
pub fn find_project_root(file_path: &Path) -> Result<PathBuf, ConfigError> {
    find_marked_ancestor(file_path, PROJECT_MARKER_FILE)
}

/// Walk upward from `start` to the first directory containing `marker`.
pub fn find_marked_ancestor(start: &Path, marker: &'static str) -> Result<PathBuf, ConfigError> {
    let absolute = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir()?.join(start)
    };

    let mut dir = if absolute.is_dir() {
        Some(absolute.as_path())
    } else {
        absolute.parent()
    };

    while let Some(candidate) = dir {
        if candidate.join(marker).is_file() {
            return Ok(candidate.to_path_buf());
        }
        dir = candidate.parent();
    }

    Err(ConfigError::ProjectRootNotFound {
        start: start.to_path_buf(),
        marker,
    })
}
