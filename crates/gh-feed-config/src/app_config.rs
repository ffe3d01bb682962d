//! Application configuration
//!
//! Configuration loaded from a `.gh-feed.toml` / `config.toml` file, then
//! adjusted by environment variables.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Public GitHub host
pub const DEFAULT_HOST: &str = "github.com";

/// When to emit ANSI colors and styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style output only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GitHub host to query (github.com or a GitHub Enterprise hostname)
    #[serde(default = "default_host")]
    pub host: String,

    /// Maximum number of events to print (API page size when unset)
    #[serde(default)]
    pub limit: Option<usize>,

    /// Color output mode
    #[serde(default)]
    pub color: ColorMode,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            limit: None,
            color: ColorMode::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Apply `GH_HOST` and `NO_COLOR` from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using the given variable lookup
    ///
    /// `GH_HOST` replaces the host. A non-empty `NO_COLOR` turns `auto` into
    /// `never`; an explicit `always` is kept.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GH_HOST").filter(|h| !h.is_empty()) {
            log::debug!("Using host {} from GH_HOST", host);
            self.host = host;
        }

        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color && self.color == ColorMode::Auto {
            self.color = ColorMode::Never;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "github.com");
        assert_eq!(config.limit, None);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            host = "ghe.example.com"
            limit = 10
            color = "never"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.host, "ghe.example.com");
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = AppConfig::from_toml("limit = 5").unwrap();
        assert_eq!(config.host, "github.com");
        assert_eq!(config.limit, Some(5));
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_config_rejects_bad_color() {
        assert!(AppConfig::from_toml(r#"color = "sometimes""#).is_err());
    }

    #[test]
    fn test_gh_host_overrides_host() {
        let config = AppConfig::default().apply_env_with(|key| match key {
            "GH_HOST" => Some("ghe.example.com".to_string()),
            _ => None,
        });
        assert_eq!(config.host, "ghe.example.com");
    }

    #[test]
    fn test_no_color_only_affects_auto() {
        let env = |key: &str| match key {
            "NO_COLOR" => Some("1".to_string()),
            _ => None,
        };

        let auto = AppConfig::default().apply_env_with(env);
        assert_eq!(auto.color, ColorMode::Never);

        let always = AppConfig {
            color: ColorMode::Always,
            ..AppConfig::default()
        }
        .apply_env_with(env);
        assert_eq!(always.color, ColorMode::Always);
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = AppConfig::default().apply_env_with(|_| Some(String::new()));
        assert_eq!(config, AppConfig::default());
    }
}
