//! Byte progress tracking for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;

/// Progress information for a copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteProgress {
    /// Expected number of bytes (size of the source).
    pub bytes_total: u64,
    /// Bytes written so far.
    pub bytes_done: u64,
    /// Files finished so far.
    pub files_done: u64,
}

impl ByteProgress {
    /// Create a new progress report.
    #[must_use]
    pub const fn new(bytes_total: u64, bytes_done: u64, files_done: u64) -> Self {
        Self {
            bytes_total,
            bytes_done,
            files_done,
        }
    }

    /// Expected size in megabytes.
    #[must_use]
    pub fn total_megabytes(&self) -> f64 {
        self.bytes_total as f64 / BYTES_PER_MEGABYTE
    }

    /// Written size in megabytes.
    #[must_use]
    pub fn done_megabytes(&self) -> f64 {
        self.bytes_done as f64 / BYTES_PER_MEGABYTE
    }

    /// Calculate progress as a percentage (0.0 to 100.0).
    ///
    /// Destination sampling can overshoot the source estimate, so the value
    /// is capped.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.bytes_total == 0 {
            100.0
        } else {
            ((self.bytes_done as f64 / self.bytes_total as f64) * 100.0).min(100.0)
        }
    }
}

/// Thread-safe progress tracker using atomics.
///
/// Shared between the copy worker, which adds bytes as they are written, and
/// the monitor, which takes snapshots.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    bytes_total: AtomicU64,
    bytes_done: AtomicU64,
    files_done: AtomicU64,
}

impl ProgressTracker {
    /// Create a new progress tracker.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Set the expected number of bytes.
    pub fn set_total(&self, total: u64) {
        self.bytes_total.store(total, Ordering::SeqCst);
    }

    /// Add written bytes.
    pub fn add_bytes(&self, bytes: u64) {
        self.bytes_done.fetch_add(bytes, Ordering::SeqCst);
    }

    /// Increment the finished file count by 1.
    pub fn increment_files(&self) {
        self.files_done.fetch_add(1, Ordering::SeqCst);
    }

    /// Get the expected number of bytes.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bytes_total.load(Ordering::SeqCst)
    }

    /// Get the bytes written so far.
    #[must_use]
    pub fn bytes(&self) -> u64 {
        self.bytes_done.load(Ordering::SeqCst)
    }

    /// Get the finished file count.
    #[must_use]
    pub fn files(&self) -> u64 {
        self.files_done.load(Ordering::SeqCst)
    }

    /// Get a progress snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ByteProgress {
        ByteProgress::new(self.total(), self.bytes(), self.files())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_snapshot() {
        let tracker = ProgressTracker::new();
        tracker.set_total(4_000_000);
        tracker.add_bytes(1_000_000);
        tracker.add_bytes(1_000_000);
        tracker.increment_files();

        let snapshot = tracker.snapshot();

        assert_eq!(snapshot, ByteProgress::new(4_000_000, 2_000_000, 1));
        assert!((snapshot.percentage() - 50.0).abs() < f64::EPSILON);
        assert!((snapshot.done_megabytes() - 2.0).abs() < f64::EPSILON);
        assert!((snapshot.total_megabytes() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_bounds() {
        assert!((ByteProgress::new(0, 0, 0).percentage() - 100.0).abs() < f64::EPSILON);
        assert!((ByteProgress::new(10, 25, 1).percentage() - 100.0).abs() < f64::EPSILON);
    }
}
