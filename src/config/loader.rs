// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskgateError};

/// File name looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "Taskgate.toml";

/// Load a task file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Deserialize a task file from an in-memory TOML document.
pub fn parse_str(contents: &str) -> Result<RawConfigFile> {
    let config: RawConfigFile = toml::from_str(contents)?;
    Ok(config)
}

/// Load a task file from path and validate it.
///
/// - Reads TOML.
/// - Checks for:
///   - an empty task table,
///   - empty `cmd` arrays,
///   - unknown or self-referencing `after` entries,
///   - dependency cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading task file");
    let raw_config = load_from_path(path)?;
    let config = ConfigFile::try_from(raw_config)?;
    info!(path = %path.display(), tasks = config.task.len(), "task file loaded");
    Ok(config)
}

/// Resolve which task file to use, if any.
///
/// - An explicit path must exist; a missing one is a configuration error.
/// - Without an explicit path, [`DEFAULT_CONFIG_FILE`] is used if present.
/// - Otherwise `None`: the caller falls back to the built-in gate.
pub fn resolve_config_path(explicit: Option<&str>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(p) => {
            let path = PathBuf::from(p);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(TaskgateError::ConfigError(format!(
                    "task file '{}' does not exist",
                    path.display()
                )))
            }
        }
        None => {
            let path = default_config_path();
            Ok(path.is_file().then_some(path))
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
