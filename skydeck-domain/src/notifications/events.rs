//! Events published by the notification center service.
//!
//! Every successful state transition is announced on a broadcast channel so
//! UI collaborators (popup layer, notification center panel, trigger
//! consoles) can react without polling.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{DismissReason, Notification};
use crate::shared_types::ApplicationId;

/// A state transition of the notification center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "event")]
pub enum NotificationEvent {
    /// A notification was admitted into the log.
    Posted { notification: Notification },
    /// A notification was marked as read.
    Read { notification_id: Uuid },
    /// A notification was dismissed (soft-deleted, terminal).
    Dismissed {
        notification_id: Uuid,
        reason: DismissReason,
    },
    /// The entire log was reset.
    AllCleared,
    /// The log was replaced with a prepared data set.
    SampleLoaded { count: usize },
    /// The passenger's focused app changed; all scores were recomputed.
    FocusChanged {
        focused_app: Option<ApplicationId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::types::NotificationCategory;

    #[test]
    fn event_serde_tagged_representation() {
        let event = NotificationEvent::Read {
            notification_id: Uuid::new_v4(),
        };
        let serialized = serde_json::to_string(&event).unwrap();
        assert!(serialized.contains("\"event\":\"read\""));
        let deserialized: NotificationEvent = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn dismissed_event_carries_reason() {
        let event = NotificationEvent::Dismissed {
            notification_id: Uuid::new_v4(),
            reason: DismissReason::ByUser,
        };
        let serialized = serde_json::to_string(&event).unwrap();
        assert!(serialized.contains("\"reason\":\"by-user\""));
    }

    #[test]
    fn posted_event_roundtrip() {
        let notification =
            Notification::new("Movies", NotificationCategory::InApp, "Up next");
        let event = NotificationEvent::Posted { notification };
        let serialized = serde_json::to_string(&event).unwrap();
        let deserialized: NotificationEvent = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, event);
    }
}
