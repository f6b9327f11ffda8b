//! File and directory tree copying with byte progress.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::CopyError;
use crate::progress::ProgressTracker;

const CHUNK_SIZE: usize = 1024 * 1024;

/// Result of a copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// Files were copied successfully.
    Created {
        /// Number of files copied.
        files_copied: u64,
        /// Number of bytes written.
        bytes_copied: u64,
    },
    /// Source does not exist, operation skipped.
    SourceNotFound,
}

/// Entry collected during directory enumeration.
#[derive(Debug, Clone)]
struct FileEntry {
    /// Source path.
    source: PathBuf,
    /// Target path.
    target: PathBuf,
    /// Whether this is a symlink.
    is_symlink: bool,
}

/// Directory contents collected before copying.
#[derive(Debug, Default)]
struct TreeListing {
    dirs: BTreeSet<PathBuf>,
    files: Vec<FileEntry>,
}

/// Copy a file or a directory tree, whichever `source` is.
///
/// # Errors
///
/// * If the copy operation fails
pub fn copy_path(
    source: &Path,
    target: &Path,
    tracker: &ProgressTracker,
) -> Result<CopyResult, CopyError> {
    if source.is_dir() {
        copy_directory(source, target, tracker)
    } else {
        copy_file(source, target, tracker)
    }
}

/// Copy a single file, overwriting the target if it exists.
///
/// Parent directories are created as needed. Written bytes are added to
/// `tracker` as they land.
///
/// # Errors
///
/// * If the parent directory cannot be created
/// * If the copy operation fails
pub fn copy_file(
    source: &Path,
    target: &Path,
    tracker: &ProgressTracker,
) -> Result<CopyResult, CopyError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    if !source.exists() {
        log::debug!("Source does not exist");
        return Ok(CopyResult::SourceNotFound);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| CopyError::CreateDirError {
            path: parent.to_path_buf(),
            io_error: e,
        })?;
    }

    let bytes_copied = copy_file_with_reflink(source, target, tracker)?;
    tracker.increment_files();

    Ok(CopyResult::Created {
        files_copied: 1,
        bytes_copied,
    })
}

/// Copy a directory tree with parallel copying.
///
/// Copying into an existing target directory merges into it, overwriting
/// files with the same relative path.
///
/// # Errors
///
/// * If enumeration fails
/// * If any file copy fails (fail-fast behavior)
pub fn copy_directory(
    source: &Path,
    target: &Path,
    tracker: &ProgressTracker,
) -> Result<CopyResult, CopyError> {
    log::debug!(
        "Copying directory: {} -> {}",
        source.display(),
        target.display()
    );

    if !source.exists() {
        log::debug!("Source does not exist");
        return Ok(CopyResult::SourceNotFound);
    }

    let listing = enumerate_directory(source, target)?;
    let total_files = listing.files.len() as u64;

    log::debug!(
        "Found {} files and {} directories to copy",
        total_files,
        listing.dirs.len()
    );

    fs::create_dir_all(target).map_err(|e| CopyError::CreateDirError {
        path: target.to_path_buf(),
        io_error: e,
    })?;

    for dir in &listing.dirs {
        fs::create_dir_all(dir).map_err(|e| CopyError::CreateDirError {
            path: dir.clone(),
            io_error: e,
        })?;
    }

    let bytes_copied = listing
        .files
        .par_iter()
        .map(|entry| -> Result<u64, CopyError> {
            let bytes = if entry.is_symlink {
                copy_symlink(&entry.source, &entry.target)?;
                0
            } else {
                copy_file_with_reflink(&entry.source, &entry.target, tracker)?
            };
            tracker.increment_files();
            Ok(bytes)
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    Ok(CopyResult::Created {
        files_copied: total_files,
        bytes_copied,
    })
}

/// Enumerate a directory tree using jwalk for parallel traversal.
fn enumerate_directory(source: &Path, target: &Path) -> Result<TreeListing, CopyError> {
    let mut listing = TreeListing::default();

    for entry in jwalk::WalkDir::new(source)
        .skip_hidden(false)
        .follow_links(false)
    {
        let entry = entry.map_err(|e| CopyError::EnumerationError {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let source_path = entry.path();

        // Skip the root directory itself
        if source_path == source {
            continue;
        }

        let rel_path =
            source_path
                .strip_prefix(source)
                .map_err(|_| CopyError::EnumerationError {
                    path: source_path.clone(),
                    message: "Failed to strip prefix".to_string(),
                })?;
        let target_path = target.join(rel_path);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            listing.dirs.insert(target_path);
        } else {
            listing.files.push(FileEntry {
                source: source_path.clone(),
                target: target_path,
                is_symlink: file_type.is_symlink(),
            });
        }
    }

    Ok(listing)
}

/// Remove a file or symlink sitting where a copy is about to land.
fn clear_target(target: &Path) -> Result<(), CopyError> {
    match fs::symlink_metadata(target) {
        Ok(meta) if !meta.is_dir() => {
            fs::remove_file(target).map_err(|e| CopyError::RemoveError {
                path: target.to_path_buf(),
                io_error: e,
            })
        }
        _ => Ok(()),
    }
}

/// Copy a single file, trying reflink first then falling back to a chunked copy.
///
/// Returns the number of bytes written.
fn copy_file_with_reflink(
    source: &Path,
    target: &Path,
    tracker: &ProgressTracker,
) -> Result<u64, CopyError> {
    clear_target(target)?;

    // Try reflink first (copy-on-write, instant on APFS/Btrfs/ReFS)
    if reflink_copy::reflink(source, target).is_ok() {
        let len = fs::metadata(target)
            .map_err(|e| CopyError::MetadataError {
                path: target.to_path_buf(),
                io_error: e,
            })?
            .len();
        tracker.add_bytes(len);
        log::trace!("Reflinked {} -> {}", source.display(), target.display());
        return Ok(len);
    }

    let written = copy_chunked(source, target, tracker).map_err(|e| CopyError::FileCopyError {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    })?;
    log::trace!(
        "Copied {} -> {} ({written} bytes)",
        source.display(),
        target.display()
    );
    Ok(written)
}

/// Stream `source` into `target`, reporting every chunk to `tracker`.
///
/// Permissions and modification time are carried over.
fn copy_chunked(source: &Path, target: &Path, tracker: &ProgressTracker) -> std::io::Result<u64> {
    let mut reader = File::open(source)?;
    let metadata = reader.metadata()?;
    let mut writer = File::create(target)?;

    let mut buf = vec![0_u8; CHUNK_SIZE];
    let mut written = 0_u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        tracker.add_bytes(n as u64);
        written += n as u64;
    }
    writer.flush()?;

    writer.set_permissions(metadata.permissions())?;
    if let Ok(modified) = metadata.modified() {
        writer.set_modified(modified)?;
    }

    Ok(written)
}

/// Copy a symlink, preserving it as a symlink.
fn copy_symlink(source: &Path, target: &Path) -> Result<(), CopyError> {
    let link_target = fs::read_link(source).map_err(|e| CopyError::ReadLinkError {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    clear_target(target)?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&link_target, target).map_err(|e| {
            CopyError::CreateSymlinkError {
                path: target.to_path_buf(),
                io_error: e,
            }
        })?;
    }

    #[cfg(windows)]
    {
        // Windows needs to know whether the link points at a directory
        let resolved = source.parent().map_or_else(
            || link_target.clone(),
            |parent| parent.join(&link_target),
        );
        let result = if resolved.is_dir() {
            std::os::windows::fs::symlink_dir(&link_target, target)
        } else {
            std::os::windows::fs::symlink_file(&link_target, target)
        };
        result.map_err(|e| CopyError::CreateSymlinkError {
            path: target.to_path_buf(),
            io_error: e,
        })?;
    }

    log::trace!(
        "Symlinked {} -> {} (target: {})",
        source.display(),
        target.display(),
        link_target.display()
    );

    Ok(())
}
