//! # SkyDeck Core Library (`skydeck-core`)
//!
//! `skydeck-core` is the foundational library for the SkyDeck inflight
//! entertainment platform. It provides the infrastructure shared by the
//! higher layers:
//!
//! - **Error Handling**: a unified error system through the [`CoreError`]
//!   enum and the more specific [`ConfigError`].
//! - **Configuration Management**: TOML-based configuration loading with
//!   default fallbacks and validation, through [`config::ConfigLoader`] and
//!   [`config::CoreConfig`].
//! - **Logging**: a logging framework built on top of the `tracing` crate,
//!   configurable for console output in text or JSON format.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skydeck_core::config::ConfigLoader;
//! use skydeck_core::logging::initialize_logging;
//! use skydeck_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let core_config = ConfigLoader::load_from_path("skydeck.toml".as_ref())?;
//!     initialize_logging(&core_config.logging)?;
//!     tracing::info!("SkyDeck core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, NotificationsConfig};
pub use error::{ConfigError, CoreError};
pub use logging::{init_minimal_logging, initialize_logging};
