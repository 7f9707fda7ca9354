//! Configuration schema and loading.
//!
//! One YAML file per environment under the config directory; the
//! resolved environment name selects exactly one file per process run.

pub mod loader;

pub use loader::{AppConfig, ConfigError, LoadedConfig};
