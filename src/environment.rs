//! Runtime environment resolution.
//!
//! The environment name is a free-form string (conventionally `dev`,
//! `beta`, or `pre`) used only as the filename stem of the config file
//! to load. Resolution is an explicit three-tier lookup rather than a
//! side effect of flag binding, so the precedence is testable:
//!
//! 1. `--env` flag, when given
//! 2. `APP_ENV` environment variable, when set
//! 3. the built-in default, `dev`

use crate::constants::{DEFAULT_ENV, ENV_APP_ENV};
use crate::env::Env;

/// Resolve the environment name to load configuration for.
///
/// Total: absence at every tier falls through to the default, so the
/// returned string is never empty. Empty values at a tier (e.g.
/// `APP_ENV=""`) count as absent.
pub fn resolve(flag: Option<&str>, env: &Env) -> String {
    if let Some(name) = flag.filter(|s| !s.is_empty()) {
        return name.to_string();
    }
    if let Some(name) = env.var(ENV_APP_ENV).filter(|s| !s.is_empty()) {
        return name;
    }
    DEFAULT_ENV.to_string()
}
