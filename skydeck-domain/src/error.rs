//! Error module for the SkyDeck domain layer.

use skydeck_core::CoreError;
use thiserror::Error;
use uuid::Uuid;

/// A general Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// The primary error type for the domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Core error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Notification error.
    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// Other error.
    #[error("Domain error: {0}")]
    Other(String),
}

/// Error type for the notification engine.
///
/// Failure semantics: invalid or duplicate submissions and unknown-id
/// operations are rejected before any state mutation, so the notification
/// log and its derived active view never observe a partial transition.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Notification not found. Unknown-id `mark_as_read`/`dismiss` calls
    /// always surface this error rather than silently no-opping.
    #[error("Notification with ID '{0}' not found.")]
    NotFound(Uuid),

    /// A notification with the same ID is already in the log.
    #[error("Notification with ID '{0}' was already submitted.")]
    DuplicateId(Uuid),

    /// A submitted record violates the field contract.
    #[error("Invalid data for notification field '{field}': {reason}")]
    InvalidData { field: String, reason: String },

    /// Catch-all for unexpected internal failures.
    #[error("Internal notification error: {0}")]
    InternalError(String),
}
