//! Configuration types for newfile-transfer.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

/// Default location of the manifest file.
pub const DEFAULT_MANIFEST: &str = "scripts/data/files.json";

/// Default transfer destination.
pub const DEFAULT_DESTINATION: &str = "U:/Transfer";

/// Default watched folders.
pub const DEFAULT_FOLDERS: [&str; 3] = ["Folders", "to", "search"];

/// How copy progress is measured while a transfer runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressSourceKind {
    /// Bytes reported by the copy routine itself.
    #[default]
    Tracked,
    /// Size of the destination, sampled on every tick.
    DestinationSize,
}

/// Timings for the copy monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonitorConfig {
    /// Grace period before the first progress sample, in milliseconds.
    pub warmup_ms: u64,
    /// Interval between progress samples, in milliseconds.
    pub poll_interval_ms: u64,
    /// Where progress samples come from.
    pub progress_source: ProgressSourceKind,
}

impl MonitorConfig {
    /// Warmup as a [`Duration`].
    #[must_use]
    pub const fn warmup(&self) -> Duration {
        Duration::from_millis(self.warmup_ms)
    }

    /// Poll interval as a [`Duration`].
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            warmup_ms: 2000,
            poll_interval_ms: 300,
            progress_source: ProgressSourceKind::Tracked,
        }
    }
}

/// Transfer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Path to the JSON manifest of already transferred names.
    pub manifest: PathBuf,

    /// Directory that new files are copied into.
    pub destination: PathBuf,

    /// Folders scanned for new files (non-recursive).
    pub folders: Vec<PathBuf>,

    /// Copy monitor settings.
    pub monitor: MonitorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            folders: DEFAULT_FOLDERS.iter().map(PathBuf::from).collect(),
            monitor: MonitorConfig::default(),
        }
    }
}

impl Config {
    /// Resolve every relative path in the config against `base`.
    ///
    /// Absolute paths are only cleaned.
    #[must_use]
    pub fn resolve_against(mut self, base: &Path) -> Self {
        self.manifest = resolve(base, &self.manifest);
        self.destination = resolve(base, &self.destination);
        self.folders = self.folders.iter().map(|f| resolve(base, f)).collect();
        self
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        base.join(path).clean()
    }
}

/// A loaded configuration with metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The configuration, with paths resolved.
    pub config: Config,
    /// Path to the configuration file, or `None` for the built-in defaults.
    pub config_path: Option<PathBuf>,
}
