//! Default configuration values for SkyDeck Core.
//!
//! These functions are used by `serde`'s `default` attribute in the
//! configuration structures to provide sensible default values when they are
//! not specified in the configuration file.

use crate::config::{LoggingConfig, NotificationsConfig};

/// Returns the default `LoggingConfig`.
///
/// Used by `CoreConfig` if the `logging` section is missing.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default `NotificationsConfig`.
///
/// Used by `CoreConfig` if the `notifications` section is missing.
pub(super) fn default_notifications_config() -> NotificationsConfig {
    NotificationsConfig {
        max_active: default_max_active(),
        event_buffer: default_event_buffer(),
    }
}

/// Returns the default cap on concurrently displayed notifications (`6`).
pub(super) fn default_max_active() -> usize {
    6
}

/// Returns the default capacity of the notification event channel (`64`).
pub(super) fn default_event_buffer() -> usize {
    64
}
