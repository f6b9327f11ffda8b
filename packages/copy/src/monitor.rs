//! Copy-and-monitor loop.
//!
//! The copy runs on a worker thread. The calling thread waits on the worker's
//! completion channel with a timeout, and every timeout is a progress tick.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::copy::{CopyResult, copy_path};
use crate::error::CopyError;
use crate::progress::{ByteProgress, ProgressTracker};
use crate::size::dir_size;

/// Shortest poll interval honoured; smaller values are raised to this.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Where progress samples come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressSource {
    /// Bytes reported by the copy routine as it writes them.
    #[default]
    Tracked,
    /// Size of the destination path, measured on every tick.
    ///
    /// Undercounts when parts of the destination are unreadable.
    DestinationSize,
}

/// Timing and sampling options for [`copy_with_monitor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorOptions {
    /// How long to wait before the first sample.
    pub warmup: Duration,
    /// Interval between samples.
    pub poll_interval: Duration,
    /// Where samples come from.
    pub progress_source: ProgressSource,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            warmup: Duration::from_secs(2),
            poll_interval: Duration::from_millis(300),
            progress_source: ProgressSource::Tracked,
        }
    }
}

/// Produces non-decreasing progress samples for one copy.
struct Sampler<'a> {
    source: ProgressSource,
    target: &'a Path,
    tracker: &'a ProgressTracker,
    last: ByteProgress,
}

impl<'a> Sampler<'a> {
    fn new(source: ProgressSource, target: &'a Path, tracker: &'a ProgressTracker) -> Self {
        Self {
            source,
            target,
            tracker,
            last: ByteProgress::new(tracker.total(), 0, 0),
        }
    }

    fn sample(&mut self) -> ByteProgress {
        let current = self.tracker.snapshot();
        let bytes_done = match self.source {
            ProgressSource::Tracked => current.bytes_done,
            ProgressSource::DestinationSize => dir_size(self.target),
        };

        self.last = ByteProgress::new(
            current.bytes_total,
            bytes_done.max(self.last.bytes_done),
            current.files_done.max(self.last.files_done),
        );
        self.last
    }
}

/// Copy `source` to `target` on a worker thread, reporting progress.
///
/// `on_progress` is called once with zero progress, then after the warmup and
/// on every poll interval while the copy runs, and once more when it
/// finishes. Reported byte counts never decrease. The expected total is the
/// size of `source` measured before the copy starts.
///
/// # Errors
///
/// * If the copy fails
/// * If the worker thread cannot be spawned or dies without a result
pub fn copy_with_monitor<F>(
    source: &Path,
    target: &Path,
    options: &MonitorOptions,
    mut on_progress: F,
) -> Result<CopyResult, CopyError>
where
    F: FnMut(&ByteProgress),
{
    let tracker = ProgressTracker::new();
    tracker.set_total(dir_size(source));

    log::debug!(
        "Starting monitored copy {} -> {} ({} bytes)",
        source.display(),
        target.display(),
        tracker.total()
    );

    let (tx, rx) = mpsc::channel();
    let worker = {
        let tracker = Arc::clone(&tracker);
        let worker_source = source.to_path_buf();
        let worker_target = target.to_path_buf();
        thread::Builder::new()
            .name("copy-worker".to_string())
            .spawn(move || {
                let result = copy_path(&worker_source, &worker_target, &tracker);
                // The receiver only goes away if the monitor itself died
                let _ = tx.send(result);
            })
            .map_err(|e| CopyError::SpawnError {
                path: source.to_path_buf(),
                io_error: e,
            })?
    };

    let mut sampler = Sampler::new(options.progress_source, target, &tracker);
    on_progress(&sampler.last);

    let poll_interval = options.poll_interval.max(MIN_POLL_INTERVAL);
    let mut wait = options.warmup;
    let result = loop {
        match rx.recv_timeout(wait) {
            Ok(result) => break result,
            Err(RecvTimeoutError::Timeout) => {
                let progress = sampler.sample();
                log::trace!(
                    "{}: {}/{} bytes",
                    source.display(),
                    progress.bytes_done,
                    progress.bytes_total
                );
                on_progress(&progress);
                wait = poll_interval;
            }
            Err(RecvTimeoutError::Disconnected) => {
                let _ = worker.join();
                return Err(CopyError::WorkerPanicked {
                    path: source.to_path_buf(),
                });
            }
        }
    };

    if worker.join().is_err() {
        return Err(CopyError::WorkerPanicked {
            path: source.to_path_buf(),
        });
    }

    let result = result?;
    on_progress(&sampler.sample());
    log::debug!("Finished monitored copy of {}", source.display());

    Ok(result)
}
