//! envcfg — environment-selected YAML configuration loader.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use envcfg::config::AppConfig;
use envcfg::env::Env;
use envcfg::environment;
use envcfg::output;

use std::process;

use anyhow::Result;
use clap::Parser;

use cli::args::Cli;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let env_name = environment::resolve(cli.env.as_deref(), &Env::real());
    let loaded = AppConfig::load(&cli.config_dir, &env_name)?;

    print!("{}", output::render(&loaded));
    Ok(())
}
