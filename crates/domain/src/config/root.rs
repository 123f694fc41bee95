use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::feed::FeedConfig;
use super::groups::GroupConfig;
use super::ingestion::IngestionConfig;
use super::logging::LoggingConfig;
use super::retention::RetentionConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "planeboard.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/planeboard/config.toml";

/// Main configuration structure for Planeboard
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Served zone
    #[serde(default)]
    pub feed: FeedConfig,

    /// Retention sweeper configuration
    #[serde(default)]
    pub retention: RetentionConfig,

    /// Ingestion pipeline configuration
    #[serde(default)]
    pub ingestion: IngestionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Topic groups, keyed by group name
    #[serde(default)]
    pub groups: HashMap<String, GroupConfig>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. planeboard.toml in current directory
    /// 3. /etc/planeboard/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(source) = overrides.ingest_source {
            self.ingestion.source = Some(source);
        }
    }

    /// Query names are matched in lowercase, so the host is stored that way.
    fn normalize(&mut self) {
        self.feed.host = self
            .feed
            .host
            .trim()
            .trim_end_matches('.')
            .to_lowercase();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.feed.host.is_empty() {
            return Err(ConfigError::Validation(
                "feed.host must be set".to_string(),
            ));
        }

        if self.retention.window_secs == 0 || self.retention.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Retention window and sweep interval must be positive".to_string(),
            ));
        }

        if self.ingestion.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "Ingestion channel capacity must be positive".to_string(),
            ));
        }

        for (name, group) in &self.groups {
            if group.accounts.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Group '{}' has no accounts",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub ingest_source: Option<String>,
}
