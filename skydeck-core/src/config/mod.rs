//! Configuration Management for SkyDeck Core.
//!
//! This module provides the structures and mechanisms for handling
//! configuration within the SkyDeck core library.
//!
//! - [`types`] contains the configuration struct definitions such as
//!   [`CoreConfig`], [`LoggingConfig`] and [`NotificationsConfig`]. These
//!   structs define the schema of the configuration.
//! - [`defaults`] provides functions returning default values, used when a
//!   configuration file is missing or incomplete.
//! - [`loader`] implements loading configuration from a TOML file via
//!   [`ConfigLoader`].
//!
//! ## Loading process
//!
//! 1. `ConfigLoader::load_from_path()` reads the file at the given path.
//! 2. The content is parsed as TOML into [`CoreConfig`]; parse errors map to
//!    [`crate::error::ConfigError::ParseError`].
//! 3. The resulting config is validated (log level and format normalized,
//!    notification limits checked); failures map to
//!    [`crate::error::ConfigError::ValidationError`].

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, NotificationsConfig};
