//! The persisted list of names already transferred.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ManifestError;

/// Ordered list of transferred file names, backed by a JSON array on disk.
///
/// Entries are only ever appended. Each [`Manifest::record`] rewrites the
/// whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
    entries: Vec<String>,
}

impl Manifest {
    /// Create an in-memory manifest that will be written to `path`.
    ///
    /// Nothing touches the disk until [`Manifest::save`] or
    /// [`Manifest::record`] is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, entries: Vec<String>) -> Self {
        Self {
            path: path.into(),
            entries,
        }
    }

    /// Load a manifest from a JSON array of strings.
    ///
    /// # Errors
    ///
    /// * If the file cannot be read (including when it is missing)
    /// * If the file is not a JSON array of strings
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        log::debug!("Loading manifest from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| ManifestError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let entries: Vec<String> =
            serde_json::from_str(&content).map_err(|e| ManifestError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        log::debug!("Manifest has {} entries", entries.len());

        Ok(Self::new(path, entries))
    }

    /// Path the manifest is persisted to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names recorded so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether `name` has been recorded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e == name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `name` and persist the whole manifest.
    ///
    /// The name is appended even if already present, so every successful
    /// transfer adds exactly one entry.
    ///
    /// # Errors
    ///
    /// * If the manifest cannot be written
    pub fn record(&mut self, name: impl Into<String>) -> Result<(), ManifestError> {
        let name = name.into();
        log::debug!("Recording {name} in {}", self.path.display());
        self.entries.push(name);
        self.save()
    }

    /// Write the manifest to disk, replacing the previous contents.
    ///
    /// # Errors
    ///
    /// * If serialization fails
    /// * If the file cannot be written
    pub fn save(&self) -> Result<(), ManifestError> {
        let json =
            serde_json::to_string(&self.entries).map_err(|e| ManifestError::SerializeError {
                path: self.path.clone(),
                source: e,
            })?;

        fs::write(&self.path, json).map_err(|e| ManifestError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("files.json");
        fs::write(&path, r#"["a.txt", "b.mkv"]"#).unwrap();

        let manifest = Manifest::load(&path).unwrap();

        assert_eq!(manifest.entries(), ["a.txt", "b.mkv"]);
        assert_eq!(manifest.path(), path);
        assert!(manifest.contains("b.mkv"));
        assert!(!manifest.contains("c.iso"));
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let result = Manifest::load(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[test]
    fn test_load_malformed_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("files.json");
        fs::write(&path, r#"{"a.txt": true}"#).unwrap();

        let result = Manifest::load(&path);

        assert!(matches!(result, Err(ManifestError::ParseError { .. })));
    }

    #[test]
    fn test_record_appends_once_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("files.json");
        fs::write(&path, r#"["a.txt"]"#).unwrap();

        let mut manifest = Manifest::load(&path).unwrap();
        manifest.record("b.txt").unwrap();

        assert_eq!(manifest.entries(), ["a.txt", "b.txt"]);
        let reloaded = Manifest::load(&path).unwrap();
        assert_eq!(reloaded, manifest);
    }

    #[test]
    fn test_record_existing_name_adds_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("files.json");
        let mut manifest = Manifest::new(&path, vec!["a.txt".to_string()]);

        manifest.record("a.txt").unwrap();

        let reloaded = Manifest::load(&path).unwrap();
        assert_eq!(
            reloaded.entries().iter().filter(|e| *e == "a.txt").count(),
            2
        );
    }

    #[test]
    fn test_empty_manifest_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("files.json");
        Manifest::new(&path, Vec::new()).save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(Manifest::load(&path).unwrap().is_empty());
    }
}
