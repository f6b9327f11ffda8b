//! Transfer execution: monitored copy, then append-and-persist.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use newfile_transfer_copy::{ByteProgress, CopyResult, MonitorOptions, copy_with_monitor};
use newfile_transfer_manifest::Manifest;

use crate::TransferResult;
use crate::error::OperationError;
use crate::plan::PlannedTransfer;

/// Execute a planned transfer with progress reporting.
///
/// On a successful copy the name is appended to `manifest` and the manifest
/// is persisted. Skipped transfers and missing sources leave it untouched.
///
/// # Errors
///
/// * If the copy fails (nothing is recorded)
/// * If the manifest cannot be written
pub fn execute_transfer<F>(
    op: &PlannedTransfer,
    manifest: &mut Manifest,
    options: &MonitorOptions,
    on_progress: F,
) -> Result<TransferResult, OperationError>
where
    F: FnMut(&ByteProgress),
{
    if op.will_skip {
        log::debug!(
            "Skipping {}: {}",
            op.name,
            op.skip_reason.as_deref().unwrap_or("skipped")
        );
        return Ok(TransferResult::Skipped);
    }

    log::info!(
        "Transferring {} -> {}",
        op.source.display(),
        op.target.display()
    );

    match copy_with_monitor(&op.source, &op.target, options, on_progress)? {
        CopyResult::Created {
            files_copied,
            bytes_copied,
        } => {
            manifest.record(op.name.as_str())?;
            Ok(TransferResult::Copied {
                files_copied,
                bytes_copied,
            })
        }
        CopyResult::SourceNotFound => {
            log::warn!("Source disappeared: {}", op.source.display());
            Ok(TransferResult::Skipped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    use newfile_transfer_copy::ProgressSource;
    use newfile_transfer_manifest::find_new_files;
    use tempfile::TempDir;

    use crate::plan::plan_transfers;

    fn fast_options() -> MonitorOptions {
        MonitorOptions {
            warmup: Duration::ZERO,
            poll_interval: Duration::from_millis(10),
            progress_source: ProgressSource::Tracked,
        }
    }

    fn setup() -> (TempDir, TempDir, Manifest) {
        let watched = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let manifest_path = dest.path().join("files.json");
        fs::write(&manifest_path, r#"["a.txt"]"#).unwrap();
        let manifest = Manifest::load(&manifest_path).unwrap();
        (watched, dest, manifest)
    }

    #[test]
    fn test_execute_transfer_copies_and_records_once() {
        let (watched, dest, mut manifest) = setup();
        fs::write(watched.path().join("a.txt"), "old").unwrap();
        fs::write(watched.path().join("b.txt"), "new file").unwrap();
        let out = dest.path().join("out");

        let new_files = find_new_files(&[watched.path()], manifest.entries()).unwrap();
        let planned = plan_transfers(&new_files, &out).unwrap();
        assert_eq!(planned.len(), 1);

        let mut last = None;
        let result =
            execute_transfer(&planned[0], &mut manifest, &fast_options(), |p| {
                last = Some(*p);
            })
            .unwrap();

        assert_eq!(
            result,
            TransferResult::Copied {
                files_copied: 1,
                bytes_copied: 8
            }
        );
        assert_eq!(fs::read_to_string(out.join("b.txt")).unwrap(), "new file");
        assert_eq!(last.unwrap().bytes_done, 8);

        let reloaded = Manifest::load(manifest.path()).unwrap();
        assert_eq!(reloaded.entries(), ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_execute_transfer_directory() {
        let (watched, dest, mut manifest) = setup();
        fs::create_dir_all(watched.path().join("shoot/raw")).unwrap();
        fs::write(watched.path().join("shoot/raw/1.cr2"), vec![9_u8; 100]).unwrap();
        fs::write(watched.path().join("shoot/index.txt"), "idx").unwrap();
        let out = dest.path().join("out");

        let new_files = find_new_files(&[watched.path()], manifest.entries()).unwrap();
        let planned = plan_transfers(&new_files, &out).unwrap();
        let result = execute_transfer(&planned[0], &mut manifest, &fast_options(), |_| {}).unwrap();

        assert_eq!(
            result,
            TransferResult::Copied {
                files_copied: 2,
                bytes_copied: 103
            }
        );
        assert!(out.join("shoot/raw/1.cr2").is_file());
        assert_eq!(manifest.entries(), ["a.txt", "shoot"]);
    }

    #[test]
    fn test_execute_transfer_missing_source_records_nothing() {
        let (watched, dest, mut manifest) = setup();
        fs::write(watched.path().join("c.txt"), "c").unwrap();
        let new_files = find_new_files(&[watched.path()], manifest.entries()).unwrap();
        let mut planned = plan_transfers(&new_files, dest.path()).unwrap();
        fs::remove_file(watched.path().join("c.txt")).unwrap();
        let before = fs::read(manifest.path()).unwrap();

        // Planned as runnable, but the source vanished before the copy
        planned[0].will_skip = false;
        let result = execute_transfer(&planned[0], &mut manifest, &fast_options(), |_| {}).unwrap();

        assert_eq!(result, TransferResult::Skipped);
        assert_eq!(fs::read(manifest.path()).unwrap(), before);
    }

    #[test]
    fn test_skipped_transfer_leaves_manifest_unchanged() {
        let (watched, dest, mut manifest) = setup();
        fs::write(watched.path().join("d.txt"), "d").unwrap();
        let new_files = find_new_files(&[watched.path()], manifest.entries()).unwrap();
        let mut planned = plan_transfers(&new_files, dest.path()).unwrap();
        planned[0].will_skip = true;
        let before = fs::read(manifest.path()).unwrap();

        let result = execute_transfer(&planned[0], &mut manifest, &fast_options(), |_| {}).unwrap();

        assert_eq!(result, TransferResult::Skipped);
        assert_eq!(fs::read(manifest.path()).unwrap(), before);
        assert!(!dest.path().join("d.txt").exists());
    }
}
