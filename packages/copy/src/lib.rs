//! Directory sizing and monitored file copying for newfile-transfer.
//!
//! This crate provides:
//!
//! * Directory size estimation using `jwalk`
//! * File and directory tree copying, parallel via `rayon`
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * Byte progress tracking shared between the copier and its monitor
//! * A copy-and-monitor loop that reports progress on a fixed interval
//!
//! # Example
//!
//! ```rust,ignore
//! use newfile_transfer_copy::{copy_with_monitor, MonitorOptions};
//!
//! copy_with_monitor(source, target, &MonitorOptions::default(), |progress| {
//!     println!("{:.1}/{:.1} MB", progress.done_megabytes(), progress.total_megabytes());
//! })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod monitor;
mod progress;
mod size;

pub use copy::{CopyResult, copy_directory, copy_file, copy_path};
pub use error::CopyError;
pub use monitor::{MIN_POLL_INTERVAL, MonitorOptions, ProgressSource, copy_with_monitor};
pub use progress::{ByteProgress, ProgressTracker};
pub use size::{count_files, dir_size};
