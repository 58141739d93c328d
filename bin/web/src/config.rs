//! Application configuration.
//!
//! Loaded via the `config` crate from a TOML file embedded at build time.
//! There is no environment in the browser, so the embedded file is the only
//! source; every field has a default so a partial file still deserializes.

use serde::Deserialize;

/// The configuration file shipped with the bundle.
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Navigation bar configuration.
    #[serde(default)]
    pub nav: NavConfig,
}

/// Logging-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `hashnav_core=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Navigation bar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavConfig {
    /// Text placed between adjacent links.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_title() -> String {
    "hashnav".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_separator() -> String {
    " | ".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            logging: LoggingConfig::default(),
            nav: NavConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl AppConfig {
    /// Loads the embedded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded file is malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Loads configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has mistyped fields.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_has_correct_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title, "hashnav");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.nav.separator, " | ");
    }

    #[test]
    fn embedded_config_loads() {
        let config = AppConfig::load().expect("embedded config should parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [nav]
            separator = " / "
            "#,
        )
        .expect("partial config should parse");
        assert_eq!(config.nav.separator, " / ");
        assert_eq!(config.title, "hashnav");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(AppConfig::from_toml("title = [").is_err());
    }
}
