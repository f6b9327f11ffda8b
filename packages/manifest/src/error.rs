//! Error types for manifest handling and new-file detection.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, writing or diffing against a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read the manifest file.
    #[error("Failed to read manifest {}: {source}", path.display())]
    ReadError {
        /// Path to the manifest.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not a JSON array of strings.
    #[error("Failed to parse manifest {}: {source}", path.display())]
    ParseError {
        /// Path to the manifest.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the manifest.
    #[error("Failed to serialize manifest {}: {source}", path.display())]
    SerializeError {
        /// Path to the manifest.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the manifest file.
    #[error("Failed to write manifest {}: {source}", path.display())]
    WriteError {
        /// Path to the manifest.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to list a watched folder.
    #[error("Failed to list folder {}: {source}", path.display())]
    ListFolder {
        /// The watched folder.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
