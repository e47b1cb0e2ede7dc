//! Main application configuration
//!
//! This module defines the configuration structures for the match-oracle
//! CLI, including TOML file loading, environment variable overrides and
//! validation.

use crate::error::OracleError;
use crate::report::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub data: DataSettings,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Roster location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// JSON file holding the team roster
    pub teams_path: PathBuf,
}

/// Presentation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "match-oracle".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            teams_path: PathBuf::from("data/teams.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("ORACLE_SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("ORACLE_LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(path) = env::var("ORACLE_TEAMS_PATH") {
            config.data.teams_path = PathBuf::from(path);
        }
        if let Ok(format) = env::var("ORACLE_OUTPUT_FORMAT") {
            config.output.format = format
                .parse::<OutputFormat>()
                .with_context(|| format!("Invalid ORACLE_OUTPUT_FORMAT value: {}", format))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

fn configuration_error(message: impl Into<String>) -> anyhow::Error {
    OracleError::ConfigurationError {
        message: message.into(),
    }
    .into()
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(configuration_error(format!(
                "Invalid log level: {}",
                config.service.log_level
            )))
        }
    }

    if config.service.name.is_empty() {
        return Err(configuration_error("Service name cannot be empty"));
    }

    if config.data.teams_path.as_os_str().is_empty() {
        return Err(configuration_error("Teams path cannot be empty"));
    }

    Ok(())
}
