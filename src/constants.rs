//! App-wide constants.
//!
//! Centralises the tool name, config directory, file extensions, and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "envcfg";

/// Default directory searched for per-environment config files.
pub const CONFIG_DIR: &str = "configs";

/// Environment name used when neither the flag nor the variable is set.
pub const DEFAULT_ENV: &str = "dev";

/// File extensions probed when locating a config file, in preference order.
pub const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];


// ── Environment variable names ──────────────────────────────────────

pub const ENV_APP_ENV: &str = "APP_ENV";
