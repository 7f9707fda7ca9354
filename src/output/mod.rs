//! Human-readable rendering of a loaded configuration.
//!
//! Rendering is separated from printing so the exact output can be
//! asserted in tests; the binary writes the returned string to stdout.

use colored::Colorize;

use crate::config::LoadedConfig;

const RULE: &str = "───────────────────────────────────";

/// Render the confirmation line and the labeled value dump.
pub fn render(loaded: &LoadedConfig) -> String {
    let config = &loaded.config;
    let mut out = String::new();

    out.push_str(&format!(
        " {} Loaded configuration from {}\n",
        "✔".green().bold(),
        loaded.path.display().to_string().bold(),
    ));
    out.push_str(&format!("{}\n", RULE.dimmed()));
    out.push_str(&render_value("HTTP address", &config.http.addr));
    out.push_str(&render_value("MySQL DSN", &config.mysql.dsn));
    out.push_str(&render_value("Log level", &config.log.level));
    out.push_str(&format!("{}\n", RULE.dimmed()));

    out
}

fn render_value(label: &str, value: &str) -> String {
    let shown = if value.is_empty() {
        "(unset)".dimmed().to_string()
    } else {
        value.to_string()
    };
    format!(" {} {}\n", format!("{:<13}", format!("{label}:")).bold(), shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn loaded(config: AppConfig) -> LoadedConfig {
        LoadedConfig {
            config,
            path: PathBuf::from("configs/dev.yaml"),
        }
    }

    #[test]
    fn render_names_the_file_used() {
        colored::control::set_override(false);
        let out = render(&loaded(AppConfig::default()));
        assert!(out.contains("configs/dev.yaml"), "got: {out}");
    }

    #[test]
    fn render_shows_all_three_values() {
        colored::control::set_override(false);
        let mut config = AppConfig::default();
        config.http.addr = "0.0.0.0:8080".to_string();
        config.mysql.dsn = "root@tcp(db:3306)/app".to_string();
        config.log.level = "info".to_string();

        let out = render(&loaded(config));
        assert!(out.contains("HTTP address:"));
        assert!(out.contains("0.0.0.0:8080"));
        assert!(out.contains("MySQL DSN:"));
        assert!(out.contains("root@tcp(db:3306)/app"));
        assert!(out.contains("Log level:"));
        assert!(out.contains("info"));
    }

    #[test]
    fn render_marks_empty_values_as_unset() {
        colored::control::set_override(false);
        let out = render(&loaded(AppConfig::default()));
        assert_eq!(out.matches("(unset)").count(), 3, "got: {out}");
    }
}
