//! Logging System for SkyDeck Core.
//!
//! A configurable logging framework built upon the `tracing` ecosystem.
//! Console output is supported in text or JSON format; the active level is
//! driven by [`LoggingConfig`] or, for the minimal setup, by `RUST_LOG`.

use crate::config::LoggingConfig;
use crate::error::CoreError;

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests and early application startup before full
/// configuration is loaded, or as a fallback if detailed logging
/// initialization fails. Filters messages based on the `RUST_LOG`
/// environment variable, defaulting to "info" if unset or invalid.
/// Errors during initialization (e.g., a global logger already set) are
/// ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initializes the global logging system based on the provided [`LoggingConfig`].
///
/// The configured level becomes the default directive of an [`EnvFilter`],
/// so `RUST_LOG` can still raise or lower verbosity per target. Returns
/// [`CoreError::LoggingInitialization`] if a global subscriber is already
/// installed.
pub fn initialize_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = fmt::Subscriber::builder().with_env_filter(filter);

    let init_result = match config.format.to_lowercase().as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    init_result.map_err(|e| {
        CoreError::LoggingInitialization(format!("failed to set global subscriber: {}", e))
    })
}
