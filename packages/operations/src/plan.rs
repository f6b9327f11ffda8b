//! Transfer planning - resolve sources, targets and sizes without copying.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use newfile_transfer_copy::{count_files, dir_size};
use newfile_transfer_manifest::NewFiles;

use crate::error::OperationError;

/// A planned transfer with metadata for progress display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTransfer {
    /// Name of the file or directory, as recorded in the manifest.
    pub name: String,
    /// Source path (absolute).
    pub source: PathBuf,
    /// Target path: the destination joined with `name`.
    pub target: PathBuf,
    /// Whether the source is a directory tree.
    pub is_directory: bool,
    /// Size of the source in bytes.
    pub bytes_total: u64,
    /// Number of files (1 for single files, N for directories).
    pub file_count: u64,
    /// Whether this transfer will be skipped.
    pub will_skip: bool,
    /// Reason for skipping (if applicable).
    pub skip_reason: Option<String>,
}

/// Plan one transfer per new file, targeting `destination/<name>`.
///
/// Order follows `new_files`. Sources that vanished since the scan are
/// planned as skipped.
///
/// # Errors
///
/// * If a source path cannot be made absolute
pub fn plan_transfers(
    new_files: &NewFiles,
    destination: &Path,
) -> Result<Vec<PlannedTransfer>, OperationError> {
    log::debug!(
        "Planning {} transfer(s) into {}",
        new_files.file_count(),
        destination.display()
    );

    new_files
        .iter()
        .map(|(folder, name)| plan_transfer(folder, name, destination))
        .collect()
}

fn plan_transfer(
    folder: &Path,
    name: &str,
    destination: &Path,
) -> Result<PlannedTransfer, OperationError> {
    let joined = folder.join(name);
    let source = std::path::absolute(&joined).map_err(|e| OperationError::IoError {
        path: joined.clone(),
        source: e,
    })?;
    let target = destination.join(name);

    let exists = source.exists();
    let planned = PlannedTransfer {
        name: name.to_string(),
        is_directory: source.is_dir(),
        bytes_total: dir_size(&source),
        file_count: count_files(&source),
        will_skip: !exists,
        skip_reason: (!exists).then(|| "not found".to_string()),
        source,
        target,
    };

    log::trace!(
        "Planned {} -> {} ({} bytes)",
        planned.source.display(),
        planned.target.display(),
        planned.bytes_total
    );

    Ok(planned)
}
