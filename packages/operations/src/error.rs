//! Error types for transfer operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while planning or executing transfers.
#[derive(Debug, Error)]
pub enum OperationError {
    /// IO error while resolving a path.
    #[error("IO error at {}: {source}", path.display())]
    IoError {
        /// Path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The copy itself failed.
    #[error("Copy error: {0}")]
    CopyError(#[from] newfile_transfer_copy::CopyError),

    /// The manifest could not be updated.
    #[error("Manifest error: {0}")]
    ManifestError(#[from] newfile_transfer_manifest::ManifestError),
}
