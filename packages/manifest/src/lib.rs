//! Seen-file manifest and new-file detection for newfile-transfer.
//!
//! # Example
//!
//! ```rust,ignore
//! use newfile_transfer_manifest::{Manifest, find_new_files};
//!
//! let mut manifest = Manifest::load(Path::new("scripts/data/files.json"))?;
//! let new_files = find_new_files(&folders, manifest.entries())?;
//! for (folder, name) in new_files.iter() {
//!     // copy folder/name somewhere, then:
//!     manifest.record(name)?;
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod manifest;
mod scan;

pub use error::ManifestError;
pub use manifest::Manifest;
pub use scan::{FolderFiles, NewFiles, find_new_files};
