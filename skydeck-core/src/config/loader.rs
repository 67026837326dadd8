//! Configuration loading for SkyDeck Core.
//!
//! [`ConfigLoader`] reads a TOML file into [`CoreConfig`], applies defaults
//! for missing sections, and validates the result.

use std::fs;
use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Loads and validates the SkyDeck core configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from the TOML file at `path`.
    ///
    /// A missing file is not an error condition handled here; callers that
    /// want optional configuration should check for existence and fall back
    /// to [`CoreConfig::default`].
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: CoreConfig = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Self::validate(config).map_err(CoreError::from)
    }

    /// Validates and normalizes a parsed configuration.
    ///
    /// Log level and format are lowercased; unknown values and zero-sized
    /// notification limits are rejected.
    pub fn validate(mut config: CoreConfig) -> Result<CoreConfig, ConfigError> {
        config.logging.level = config.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "invalid log level '{}', expected one of {:?}",
                config.logging.level, VALID_LOG_LEVELS
            )));
        }

        config.logging.format = config.logging.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "invalid log format '{}', expected one of {:?}",
                config.logging.format, VALID_LOG_FORMATS
            )));
        }

        if config.notifications.max_active == 0 {
            return Err(ConfigError::ValidationError(
                "notifications.max_active must be at least 1".to_string(),
            ));
        }
        if config.notifications.event_buffer == 0 {
            return Err(ConfigError::ValidationError(
                "notifications.event_buffer must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }
}
