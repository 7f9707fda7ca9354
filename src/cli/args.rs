//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Load the YAML config for a runtime environment and print it.
#[derive(Parser, Debug)]
#[command(name = envcfg::constants::APP_NAME, version)]
pub struct Cli {
    /// Runtime environment to load (e.g. dev, beta, pre).
    ///
    /// When omitted, the APP_ENV environment variable is consulted,
    /// then the built-in default "dev". The precedence is wired
    /// explicitly in the resolver, not through clap's env binding.
    #[arg(long, short = 'e')]
    pub env: Option<String>,

    /// Directory containing the per-environment config files.
    #[arg(long, value_name = "DIR", default_value = envcfg::constants::CONFIG_DIR)]
    pub config_dir: PathBuf,
}
