//! Domain layer for the SkyDeck inflight entertainment platform.
//!
//! This crate hosts the notification prioritization engine: the notification
//! data model, the category- and context-dependent scoring formulas, the
//! global ranking order, and the notification center service that holds the
//! notification log and its bounded "active" popup view.

// Re-export core module
pub use skydeck_core as core;

pub mod error;
pub mod notifications;
pub mod shared_types;

pub use error::{DomainError, DomainResult};
pub use notifications::{
    score, score_breakdown, DefaultNotificationService, DismissReason, FocusContext, Notification,
    NotificationCategory, NotificationError, NotificationEvent, NotificationService,
    NotificationStats,
};
pub use shared_types::ApplicationId;
