//! New-file detection: watched folder listings diffed against seen names.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ManifestError;

/// New files found in one watched folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderFiles {
    /// The watched folder, as it was passed in.
    pub folder: PathBuf,
    /// Names of direct children not yet seen, in listing order.
    pub files: Vec<String>,
}

/// New files grouped by folder.
///
/// Folders keep the order they were scanned in. Folders without new files are
/// left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFiles {
    groups: Vec<FolderFiles>,
}

impl NewFiles {
    /// Whether nothing new was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of new files across all folders.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }

    /// The per-folder groups.
    #[must_use]
    pub fn groups(&self) -> &[FolderFiles] {
        &self.groups
    }

    /// New files in `folder`, if any.
    #[must_use]
    pub fn get(&self, folder: &Path) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.folder == folder)
            .map(|g| g.files.as_slice())
    }

    /// Iterate over `(folder, name)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.groups.iter().flat_map(|g| {
            g.files
                .iter()
                .map(move |name| (g.folder.as_path(), name.as_str()))
        })
    }
}

/// Find direct children of `folders` whose names are not in `seen`.
///
/// Listings are non-recursive and sorted by name. Names that are not valid
/// UTF-8 are skipped with a warning.
///
/// # Errors
///
/// * If a folder cannot be listed
pub fn find_new_files<P: AsRef<Path>>(
    folders: &[P],
    seen: &[String],
) -> Result<NewFiles, ManifestError> {
    let seen: HashSet<&str> = seen.iter().map(String::as_str).collect();
    let mut new_files = NewFiles::default();

    for folder in folders {
        let folder = folder.as_ref();
        let files: Vec<String> = list_folder(folder)?
            .into_iter()
            .filter(|name| !seen.contains(name.as_str()))
            .collect();

        log::debug!("{}: {} new file(s)", folder.display(), files.len());

        if !files.is_empty() {
            new_files.groups.push(FolderFiles {
                folder: folder.to_path_buf(),
                files,
            });
        }
    }

    Ok(new_files)
}

/// Sorted names of the direct children of `folder`.
fn list_folder(folder: &Path) -> Result<Vec<String>, ManifestError> {
    let list_error = |e| ManifestError::ListFolder {
        path: folder.to_path_buf(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(folder).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::warn!(
                "Skipping non UTF-8 name in {}: {}",
                folder.display(),
                raw.to_string_lossy()
            ),
        }
    }

    names.sort();
    Ok(names)
}
