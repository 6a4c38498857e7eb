//! Configuration management for `JournalMap`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::JournalMapError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `JournalMap`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalMapConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Map defaults
    #[serde(default)]
    pub map: MapConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Map settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Zoom level used when the caller supplies none (larger is more zoomed out)
    #[serde(default = "default_zoom_level")]
    pub default_zoom_level: f64,
    /// Journal snapshot read when no path is given
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_zoom_level() -> f64 {
    1.0
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_zoom_level: default_zoom_level(),
            snapshot_path: None,
        }
    }
}

impl JournalMapConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. JOURNALMAP_MAP__DEFAULT_ZOOM_LEVEL=4.5
        builder = builder.add_source(
            Environment::with_prefix("JOURNALMAP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: JournalMapConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("journal-map").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self
            .map
            .snapshot_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.map.snapshot_path = None;
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_zoom_level()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_zoom_level(&self) -> Result<()> {
        let zoom = self.map.default_zoom_level;
        if !zoom.is_finite() || zoom < 0.0 {
            return Err(JournalMapError::config(format!(
                "Default zoom level must be a finite, non-negative number (got {zoom})"
            ))
            .into());
        }
        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(JournalMapError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(JournalMapError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
