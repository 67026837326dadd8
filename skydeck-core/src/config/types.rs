//! Configuration Data Structures for SkyDeck Core.
//!
//! These structs are populated by deserializing a TOML configuration file.
//! Missing fields fall back to values from the [`super::defaults`] module,
//! and unknown fields are rejected via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use serde::Deserialize;

/// Configuration settings for the logging subsystem.
///
/// Used by `skydeck_core::logging` to initialize the global logger.
///
/// # Examples
///
/// ```
/// use skydeck_core::config::LoggingConfig;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// The format for log messages.
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            format: defaults::default_log_format(),
        }
    }
}

/// Configuration settings for the notification engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationsConfig {
    /// Maximum number of notifications shown concurrently as active popups.
    /// Must be at least 1.
    #[serde(default = "defaults::default_max_active")]
    pub max_active: usize,
    /// Capacity of the broadcast channel carrying notification events.
    /// Must be at least 1.
    #[serde(default = "defaults::default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_active: defaults::default_max_active(),
            event_buffer: defaults::default_event_buffer(),
        }
    }
}

/// Root configuration structure for the SkyDeck core system.
///
/// Aggregates all core configuration sections. Designed to be deserialized
/// from a TOML file, with defaults for missing sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Logging configuration.
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    /// Notification engine configuration.
    #[serde(default = "defaults::default_notifications_config")]
    pub notifications: NotificationsConfig,
}
