//! Directory size estimation and file counting using jwalk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

/// Total size in bytes of all regular files under a path.
///
/// - If path is a file: returns its size
/// - If path is a directory: returns the sum of all file sizes recursively
/// - If path doesn't exist: returns 0
///
/// Subtrees that cannot be read (permission errors) count as 0, so the result
/// can be low. Symlinks inside the tree are not followed.
#[must_use]
pub fn dir_size(path: &Path) -> u64 {
    let Ok(metadata) = fs::metadata(path) else {
        return 0;
    };

    if !metadata.is_dir() {
        return metadata.len();
    }

    jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .sort(false)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.metadata().map_or(0, |m| m.len()))
        .sum()
}

/// Count files in a path.
///
/// - If path is a file: returns 1
/// - If path is a directory: returns count of all files recursively
/// - If path doesn't exist or is a symlink: returns 0
#[must_use]
pub fn count_files(path: &Path) -> u64 {
    if !path.exists() || path.is_symlink() {
        return 0;
    }

    if path.is_file() {
        return 1;
    }

    if !path.is_dir() {
        return 0;
    }

    jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .sort(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count() as u64
}
