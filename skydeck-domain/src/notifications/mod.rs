// Main module for the notification prioritization engine: model, scoring,
// ranking, events, and the notification center service.

pub mod events;
pub mod ranking;
pub mod samples;
pub mod scoring;
pub mod service;
pub mod types;

// Re-exports for easier access by consumers of this submodule.
pub use events::NotificationEvent;
pub use ranking::{priority_class, rank};
pub use samples::sample_notifications;
pub use scoring::{
    category_importance, classify_context, score, score_breakdown, FocusContext, ScoreBreakdown,
    ScoreFormula,
};
pub use service::{DefaultNotificationService, NotificationService};
pub use types::{DismissReason, Notification, NotificationCategory, NotificationStats};

pub use crate::error::NotificationError;
