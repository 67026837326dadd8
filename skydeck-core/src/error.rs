//! Error handling for the SkyDeck core layer.
//!
//! This module defines the error types shared across the core layer using
//! the `thiserror` crate. The main error type is [`CoreError`], which wraps
//! more specific errors such as [`ConfigError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the SkyDeck platform.
///
/// Represents all failures that can occur in the core layer. Higher layers
/// wrap this type in their own error enums.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during the initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// General I/O errors not covered by other variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors due to invalid input provided to a function or method.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// Catch-all for unexpected internal errors within the core library.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file as TOML.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed successfully but contains invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_error_display() {
        let err = ConfigError::ValidationError("bad level".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration validation failed: bad level"
        );
    }

    #[test]
    fn core_error_wraps_config_error() {
        let err: CoreError = ConfigError::ValidationError("oops".to_string()).into();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(format!("{}", err).starts_with("Configuration Error:"));
    }

    #[test]
    fn core_error_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
