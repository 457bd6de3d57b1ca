use serde::{Deserialize, Serialize};
use std::path::Path;

use super::backend::BackendConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::suffix::SuffixConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-backend.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-backend/config.toml";

/// Main configuration structure for Ferrous Backend
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Socket listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Response rendering (SOA hostmaster)
    #[serde(default)]
    pub backend: BackendConfig,

    /// Public suffix set source and refresh
    #[serde(default)]
    pub suffix: SuffixConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-backend.toml in current directory
    /// 3. /etc/ferrous-backend/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(socket) = overrides.socket_path {
            self.server.socket_path = socket;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.socket_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Socket path cannot be empty".to_string(),
            ));
        }

        if self.server.read_buffer_size == 0 {
            return Err(ConfigError::Validation(
                "Read buffer size cannot be 0".to_string(),
            ));
        }

        if self.backend.hostmaster.trim_end_matches('.').trim().is_empty() {
            return Err(ConfigError::Validation(
                "Hostmaster cannot be empty".to_string(),
            ));
        }

        if self.suffix.cache_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Suffix cache TTL cannot be 0".to_string(),
            ));
        }

        if self.suffix.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Suffix refresh interval cannot be 0".to_string(),
            ));
        }

        if self.suffix.list_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Suffix list URL cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database pool needs at least one connection".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides applied on top of the loaded file
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub socket_path: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
