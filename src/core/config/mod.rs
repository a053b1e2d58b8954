//! core::config
//!
//! Configuration schema, loading and path resolution.
//!
//! # Precedence
//!
//! The repository path is resolved in this order:
//! 1. `--path` on the command line (command-line host only)
//! 2. `path` in the `--config` TOML file (command-line host only)
//! 3. `path` in the provider configuration sent by the host
//! 4. `$GIT_LOCAL_PATH`, consulted only when the configured value is null
//!
//! A configured empty string is not replaced by the environment; it is
//! reported as a missing path.
//!
//! # Example
//!
//! ```
//! use gitlocal::core::config::{resolve_path, PathError};
//! use gitlocal::core::types::ConfigValue;
//!
//! let configured = ConfigValue::known("/srv/repo".to_string());
//! assert_eq!(resolve_path(&configured, Some("/other")), Ok("/srv/repo".to_string()));
//!
//! assert_eq!(resolve_path(&ConfigValue::Null, Some("/other")), Ok("/other".to_string()));
//! assert_eq!(resolve_path(&ConfigValue::Null, None), Err(PathError::Missing));
//! ```

pub mod schema;

pub use schema::{ConfigFile, ProviderConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::ConfigValue;

/// Environment variable consulted when `path` is not configured.
pub const PATH_ENV: &str = "GIT_LOCAL_PATH";

/// Errors from configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Why a repository path could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The host does not know the value yet.
    #[error("path is not known yet")]
    Unknown,

    /// Neither configuration nor environment gave a non-empty path.
    #[error("path is missing or empty")]
    Missing,
}

/// Resolve the repository path from configuration and the environment.
///
/// `env` is the value of [`PATH_ENV`], passed in so resolution stays a
/// pure function.
///
/// # Errors
///
/// - [`PathError::Unknown`] if the configured value is unknown
/// - [`PathError::Missing`] if the result is empty
pub fn resolve_path(config: &ConfigValue<String>, env: Option<&str>) -> Result<String, PathError> {
    let path = match config {
        ConfigValue::Unknown => return Err(PathError::Unknown),
        ConfigValue::Known(path) => path.as_str(),
        ConfigValue::Null => env.unwrap_or(""),
    };

    if path.is_empty() {
        return Err(PathError::Missing);
    }

    Ok(path.to_string())
}

/// Read the [`PATH_ENV`] variable from the process environment.
pub fn path_from_env() -> Option<String> {
    std::env::var(PATH_ENV).ok()
}

/// Load and parse a TOML config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid config.
pub fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Build the provider configuration the command-line host sends.
///
/// An explicit path wins over the config file. With neither, the path is
/// left null so the provider applies its environment fallback.
///
/// # Errors
///
/// Returns an error if `config_file` is given and cannot be loaded.
pub fn provider_config(
    explicit_path: Option<&Path>,
    config_file: Option<&Path>,
) -> Result<ProviderConfig, ConfigError> {
    if let Some(path) = explicit_path {
        return Ok(ProviderConfig::with_path(path.to_string_lossy()));
    }

    match config_file {
        Some(file) => Ok(load_file(file)?.into_provider_config()),
        None => Ok(ProviderConfig::default()),
    }
}
