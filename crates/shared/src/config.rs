//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Clock configuration.
    #[serde(default)]
    pub clock: ClockConfig,
    /// Label localization configuration.
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Clock configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// IANA timezone used to decide what "today" is (e.g. "Asia/Kolkata").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Label localization configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nConfig {
    /// Path to a JSON object mapping source labels to translations.
    ///
    /// When unset, labels are served in the source language.
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// Treat a label missing from the catalog as an error instead of
    /// falling back to the source text.
    #[serde(default)]
    pub strict: bool,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TIMESHEET").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
