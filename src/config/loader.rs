//! Config struct and loading logic.
//!
//! A config file is located by its environment name: `<dir>/<env>.yaml`,
//! falling back to `<dir>/<env>.yml`. Every section and field is optional
//! (absent values default to the empty string); unknown keys are ignored.
//! Type mismatches are strict: a non-string where a string is expected
//! fails the load rather than being coerced.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::YAML_EXTENSIONS;

/// Errors during config loading. All are fatal to the one-shot startup
/// sequence; nothing is retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no config file for environment '{name}' under {dir} (tried {name}.yaml, {name}.yml)")]
    NotFound { name: String, dir: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}

/// Top-level configuration.
///
/// Loaded once at startup and passed by reference thereafter; there is
/// no process-global config handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub mysql: MysqlConfig,
    pub log: LogConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Listen address in `host:port` form.
    pub addr: String,
}

/// MySQL connection configuration.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MysqlConfig {
    /// Data source name (connection string). May embed credentials.
    pub dsn: String,
}

impl std::fmt::Debug for MysqlConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MysqlConfig")
            .field("dsn", &if self.dsn.is_empty() { "" } else { "[REDACTED]" })
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Verbosity label, e.g. "debug" or "info". Free-form.
    pub level: String,
}

/// A parsed config together with the path of the file it came from,
/// kept for diagnostic reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: PathBuf,
}

impl AppConfig {
    /// Load the config file for `name` from `dir`.
    ///
    /// Plain synchronous read, no shared state; callers typically invoke
    /// it exactly once during startup.
    pub fn load(dir: &Path, name: &str) -> Result<LoadedConfig, ConfigError> {
        let path = Self::locate(dir, name).ok_or_else(|| ConfigError::NotFound {
            name: name.to_string(),
            dir: dir.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
            path: path.clone(),
            source: e,
        })?;

        let config = serde_yaml_ng::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.clone(),
            source: e,
        })?;

        Ok(LoadedConfig { config, path })
    }

    /// Find the config file for `name`, probing extensions in
    /// preference order (`.yaml` before `.yml`).
    fn locate(dir: &Path, name: &str) -> Option<PathBuf> {
        YAML_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|candidate| candidate.is_file())
    }
}
