//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/surfspot/config.toml
//!
//! Deployment secrets can also arrive via the environment (`BOT_TOKEN`,
//! `STORMGLASS_API_KEY`, `DOMAIN`, `PORT`); environment values override the
//! file so hosted setups never need to write the token to disk.

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Telegram bot settings
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Forecast settings
    #[serde(default)]
    pub forecast: ForecastConfig,
}

/// Telegram bot settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelegramConfig {
    /// Bot API token from @BotFather
    #[serde(default)]
    pub token: String,

    /// Public base URL of the deployment, e.g. "https://surfspot.example.com"
    #[serde(default)]
    pub domain: String,

    /// Path Telegram delivers updates to
    #[serde(default = "default_webhook_path")]
    pub webhook_path: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the Mini App assets served under /map/
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Forecast settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// StormGlass API key
    #[serde(default)]
    pub api_key: String,

    /// Forecast window length in hours
    #[serde(default = "default_forecast_hours")]
    pub hours: u32,
}

// Default value functions for serde
fn default_webhook_path() -> String {
    DEFAULT_WEBHOOK_PATH.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_static_dir() -> String {
    DEFAULT_STATIC_DIR.to_string()
}
fn default_forecast_hours() -> u32 {
    DEFAULT_FORECAST_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram: TelegramConfig {
                token: String::new(),
                domain: String::new(),
                webhook_path: default_webhook_path(),
            },
            server: ServerConfig::default(),
            forecast: ForecastConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            hours: default_forecast_hours(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist. Environment overrides
    /// are applied on top.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// Recognized: BOT_TOKEN, DOMAIN, STORMGLASS_API_KEY, PORT
    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            if !token.is_empty() {
                self.telegram.token = token;
            }
        }
        if let Ok(domain) = std::env::var("DOMAIN") {
            if !domain.is_empty() {
                self.telegram.domain = domain;
            }
        }
        if let Ok(key) = std::env::var("STORMGLASS_API_KEY") {
            if !key.is_empty() {
                self.forecast.api_key = key;
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["telegram", "token"] => Some(self.telegram.token.clone()),
            ["telegram", "domain"] => Some(self.telegram.domain.clone()),
            ["telegram", "webhook_path"] => Some(self.telegram.webhook_path.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["server", "static_dir"] => Some(self.server.static_dir.clone()),

            ["forecast", "api_key"] => Some(self.forecast.api_key.clone()),
            ["forecast", "hours"] => Some(self.forecast.hours.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["telegram", "token"] => {
                self.telegram.token = value.to_string();
            }
            ["telegram", "domain"] => {
                self.telegram.domain = value.trim_end_matches('/').to_string();
            }
            ["telegram", "webhook_path"] => {
                self.telegram.webhook_path = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }
            ["server", "static_dir"] => {
                self.server.static_dir = value.to_string();
            }

            ["forecast", "api_key"] => {
                self.forecast.api_key = value.to_string();
            }
            ["forecast", "hours"] => {
                self.forecast.hours = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid hours value: {}", value)))?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "telegram.token",
            "telegram.domain",
            "telegram.webhook_path",
            "server.host",
            "server.port",
            "server.static_dir",
            "forecast.api_key",
            "forecast.hours",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Full webhook URL, or None when no public domain is configured
    pub fn webhook_url(&self) -> Option<String> {
        if self.telegram.domain.is_empty() {
            None
        } else {
            Some(format!(
                "{}{}",
                self.telegram.domain.trim_end_matches('/'),
                self.telegram.webhook_path
            ))
        }
    }

    /// URL of the Mini App page handed to Telegram keyboards
    pub fn map_url(&self) -> Option<String> {
        if self.telegram.domain.is_empty() {
            None
        } else {
            Some(format!(
                "{}/map/",
                self.telegram.domain.trim_end_matches('/')
            ))
        }
    }
}
