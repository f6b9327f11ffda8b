//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use clap::Parser;
use newfile_transfer_config::Config;

/// CLI arguments for newfile-transfer.
#[derive(Debug, Parser)]
#[command(
    name = "newfile-transfer",
    about = "Copy files that appeared in watched folders since the last transfer",
    version
)]
pub struct Args {
    /// Folders to scan (overrides the configured list).
    #[arg(index = 1)]
    pub folders: Vec<PathBuf>,

    /// Config file to use instead of ./newfile-transfer.toml.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Manifest file (overrides config).
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Transfer destination (overrides config).
    #[arg(long, short = 'd')]
    pub destination: Option<PathBuf>,

    /// Copy without asking for confirmation.
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// List new files and exit.
    #[arg(long)]
    pub list: bool,

    /// Disable progress bars (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Replace config values with the ones given on the command line.
    ///
    /// Relative paths resolve against `cwd`.
    #[must_use]
    pub fn apply_overrides(&self, mut config: Config, cwd: &Path) -> Config {
        if let Some(ref manifest) = self.manifest {
            config.manifest = cwd.join(manifest);
        }
        if let Some(ref destination) = self.destination {
            config.destination = cwd.join(destination);
        }
        if !self.folders.is_empty() {
            config.folders = self.folders.iter().map(|f| cwd.join(f)).collect();
        }
        config
    }

    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}
