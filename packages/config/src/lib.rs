//! Configuration loading for newfile-transfer.
//!
//! Settings come from an optional `newfile-transfer.toml` file. Anything the
//! file leaves out falls back to the built-in defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use newfile_transfer_config::{discover_config, load_config, load_default_config};
//!
//! let cwd = std::env::current_dir()?;
//! let loaded = match discover_config(&cwd) {
//!     Some(path) => load_config(&path)?,
//!     None => load_default_config(&cwd),
//! };
//! println!("{} watched folders", loaded.config.folders.len());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod toml_loader;
mod types;

pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{
    Config, DEFAULT_DESTINATION, DEFAULT_FOLDERS, DEFAULT_MANIFEST, LoadedConfig, MonitorConfig,
    ProgressSourceKind,
};

use std::path::{Path, PathBuf};

/// File name looked up by [`discover_config`].
pub const CONFIG_FILE_NAME: &str = "newfile-transfer.toml";

/// Look for a config file in `dir`.
#[must_use]
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        log::debug!("Found config file {}", path.display());
        Some(path)
    } else {
        log::debug!("No {CONFIG_FILE_NAME} in {}", dir.display());
        None
    }
}

/// Load a configuration file and resolve its paths against its directory.
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed
/// * If the path has no parent directory
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let config = load_toml_config(path)?;

    let base_dir = path
        .parent()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?
        .to_path_buf();

    Ok(LoadedConfig {
        config: config.resolve_against(&base_dir),
        config_path: Some(path.to_path_buf()),
    })
}

/// Built-in configuration, resolved against `base_dir`.
#[must_use]
pub fn load_default_config(base_dir: &Path) -> LoadedConfig {
    LoadedConfig {
        config: Config::default().resolve_against(base_dir),
        config_path: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_config() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).is_none());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(
            discover_config(dir.path()),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_load_config_resolves_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
manifest = "files.json"
folders = ["inbox"]
"#,
        )
        .unwrap();

        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(loaded.config.manifest, dir.path().join("files.json"));
        assert_eq!(loaded.config.folders, vec![dir.path().join("inbox")]);
    }

    #[test]
    fn test_load_default_config() {
        let loaded = load_default_config(Path::new("/work"));

        assert!(loaded.config_path.is_none());
        assert_eq!(
            loaded.config.manifest,
            PathBuf::from("/work/scripts/data/files.json")
        );
        assert_eq!(loaded.config.folders[0], PathBuf::from("/work/Folders"));
    }
}
