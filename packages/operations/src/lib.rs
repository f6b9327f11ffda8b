//! Transfer planning and execution for newfile-transfer.
//!
//! Turns the new-file mapping into concrete copy jobs and runs them one at a
//! time, recording each finished name in the manifest.
//!
//! # Example
//!
//! ```rust,ignore
//! use newfile_transfer_operations::{plan_transfers, execute_transfer};
//!
//! let transfers = plan_transfers(&new_files, &destination)?;
//! for op in &transfers {
//!     execute_transfer(op, &mut manifest, &options, |progress| {
//!         println!("{}/{} bytes", progress.bytes_done, progress.bytes_total);
//!     })?;
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod apply;
mod error;
mod plan;

pub use apply::execute_transfer;
pub use error::OperationError;
pub use newfile_transfer_copy::{ByteProgress, MonitorOptions, ProgressSource};
pub use plan::{PlannedTransfer, plan_transfers};

/// Result of a single transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferResult {
    /// The source was copied and recorded in the manifest.
    Copied {
        /// Number of files copied.
        files_copied: u64,
        /// Number of bytes written.
        bytes_copied: u64,
    },
    /// Nothing was copied; the manifest is unchanged.
    Skipped,
}

impl std::fmt::Display for TransferResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copied { .. } => write!(f, "copied"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}
