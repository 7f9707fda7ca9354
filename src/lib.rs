//! envcfg — environment-selected YAML configuration loader (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod environment;
pub mod output;
