//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::sync::Arc;

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use newfile_transfer_operations::ByteProgress;

/// Progress bar manager for transfers.
pub struct ProgressManager {
    multi: Arc<MultiProgress>,
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            multi: Arc::new(MultiProgress::new()),
            enabled,
        }
    }

    /// Create a byte progress bar for one transfer.
    ///
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_byte_bar(&self, label: &str, total_bytes: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = self.multi.add(ProgressBar::new(total_bytes));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "  {prefix:<30} [{bar:25.green/dim}] {msg} {decimal_bytes_per_sec} {eta}",
                )
                .expect("Invalid progress bar template")
                .progress_chars("━━─"),
        );
        pb.set_prefix(label.to_string());
        pb
    }

    /// Move a bar to the latest sample.
    pub fn update(bar: &ProgressBar, progress: &ByteProgress) {
        if bar.length() != Some(progress.bytes_total) {
            bar.set_length(progress.bytes_total);
        }
        bar.set_position(progress.bytes_done);
        bar.set_message(progress_message(progress));
    }

    /// Print a skipped transfer line.
    pub fn print_skipped(&self, label: &str, reason: &str) {
        println!("{} {:<30} {}", "•".dimmed(), label, reason.dimmed());
        // Flush to ensure output appears immediately
        let _ = std::io::stdout().flush();
    }

    /// Print a completed transfer line with file count and size.
    pub fn print_result_with_size(&self, label: &str, result: &str, files: u64, bytes: u64) {
        println!(
            "{} {:<30} {} ({} file{}, {:.1} MB)",
            "✓".green(),
            label,
            result.dimmed(),
            files,
            if files == 1 { "" } else { "s" },
            ByteProgress::new(bytes, bytes, files).done_megabytes()
        );
        let _ = std::io::stdout().flush();
    }

    /// Clear any active progress bars (for clean output after completion).
    pub fn clear(&self) {
        self.multi.clear().ok();
    }
}

/// Bar message: megabytes written out of the expected total.
fn progress_message(progress: &ByteProgress) -> String {
    format!(
        "{:.1}/{:.1} MB ({:.0}%)",
        progress.done_megabytes(),
        progress.total_megabytes(),
        progress.percentage()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_message() {
        let progress = ByteProgress::new(4_000_000, 1_000_000, 0);
        assert_eq!(progress_message(&progress), "1.0/4.0 MB (25%)");
    }

    #[test]
    fn test_progress_message_caps_overshoot() {
        let progress = ByteProgress::new(1_000_000, 1_200_000, 1);
        assert_eq!(progress_message(&progress), "1.2/1.0 MB (100%)");
    }

    #[test]
    fn test_update_moves_hidden_bar() {
        let bar = ProgressBar::hidden();
        ProgressManager::update(&bar, &ByteProgress::new(2_000_000, 500_000, 0));

        assert_eq!(bar.length(), Some(2_000_000));
        assert_eq!(bar.position(), 500_000);
        assert_eq!(bar.message(), "0.5/2.0 MB (25%)");
    }
}
