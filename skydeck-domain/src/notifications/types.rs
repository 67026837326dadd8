use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::NotificationError;
use crate::shared_types::ApplicationId;

// --- Enums ---

/// Closed classification of a notification's origin semantics.
///
/// The category drives both the scoring formula selection and the primary
/// ranking key (see [`crate::notifications::ranking::priority_class`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationCategory {
    /// Safety-critical cabin information (seatbelt signs, emergency guidance).
    Safety,
    /// Operational flight information (delays, gate changes, turbulence).
    OperationalInfo,
    /// Platform/system messages (connectivity, account, device state).
    System,
    /// Messages emitted by one app while the passenger uses another.
    CrossApp,
    /// Discretionary promotional content.
    Promotional,
    /// Messages scoped to the app the passenger is currently inside.
    #[default]
    InApp,
}

impl NotificationCategory {
    /// All categories, in primary ranking order.
    pub const ALL: [NotificationCategory; 6] = [
        NotificationCategory::Safety,
        NotificationCategory::OperationalInfo,
        NotificationCategory::System,
        NotificationCategory::CrossApp,
        NotificationCategory::Promotional,
        NotificationCategory::InApp,
    ];
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationCategory::Safety => write!(f, "Safety"),
            NotificationCategory::OperationalInfo => write!(f, "Operational Info"),
            NotificationCategory::System => write!(f, "System"),
            NotificationCategory::CrossApp => write!(f, "Cross-App"),
            NotificationCategory::Promotional => write!(f, "Promotional"),
            NotificationCategory::InApp => write!(f, "In-App"),
        }
    }
}

/// Why a notification was dismissed. Carried on the dismissal event only;
/// the record itself keeps a single `is_visible` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissReason {
    ByUser,
    AppClosed,
    Superseded,
}

// --- Notification entity ---

/// A notification in the SkyDeck inflight entertainment platform.
///
/// Immutable once created except for the `is_read` and `is_visible` flags.
/// The four 1..=10 signals (`time_phase_bound`, `relevance`, `consequence`,
/// `recency`) and `priority_tier` are editorial inputs assigned by the
/// submitting trigger logic, not computed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    /// Free-text identifier of the emitting application.
    pub origin_app: ApplicationId,
    pub category: NotificationCategory,
    /// Editorial urgency, 1 (most urgent) ..= 6. Orthogonal to the computed
    /// score.
    pub priority_tier: u8,
    /// Monetary/promotional weight in [0, 50]; only the cross-focus formula
    /// reads it.
    #[serde(default)]
    pub priority_score_raw: f64,
    /// Urgency tied to the current flight phase, 1..=10.
    pub time_phase_bound: u8,
    /// Topical relevance to the passenger's current context, 1..=10.
    pub relevance: u8,
    /// Severity of harm if the passenger misses this information, 1..=10.
    pub consequence: u8,
    /// Freshness of the triggering event, 1..=10.
    pub recency: u8,
    /// Diagnostic description of the trigger; never used in scoring.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub trigger: String,
    /// User-facing message text.
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Notification {
    /// Creates a new notification with mid-range scoring signals.
    ///
    /// The trigger logic owning the notification is expected to overwrite
    /// the signals through the `with_*` builders before submission.
    pub fn new(
        origin_app: impl Into<ApplicationId>,
        category: NotificationCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin_app: origin_app.into(),
            category,
            priority_tier: 3,
            priority_score_raw: 0.0,
            time_phase_bound: 5,
            relevance: 5,
            consequence: 5,
            recency: 5,
            trigger: String::new(),
            message: message.into(),
            created_at: Utc::now(),
            is_read: false,
            is_visible: true,
        }
    }

    /// Sets the editorial priority tier (1..=6).
    pub fn with_priority_tier(mut self, tier: u8) -> Self {
        self.priority_tier = tier;
        self
    }

    /// Sets the monetary/promotional weight in [0, 50].
    pub fn with_priority_score(mut self, raw: f64) -> Self {
        self.priority_score_raw = raw;
        self
    }

    /// Sets the four 1..=10 scoring signals at once.
    pub fn with_signals(
        mut self,
        time_phase_bound: u8,
        relevance: u8,
        consequence: u8,
        recency: u8,
    ) -> Self {
        self.time_phase_bound = time_phase_bound;
        self.relevance = relevance;
        self.consequence = consequence;
        self.recency = recency;
        self
    }

    /// Sets the diagnostic trigger description.
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    pub fn mark_as_read(&mut self) {
        self.is_read = true;
    }

    /// Dismissal is terminal: the record stays in the log for audit but is
    /// excluded from every visible view.
    pub fn dismiss(&mut self) {
        self.is_visible = false;
    }

    /// Validates the field contract.
    ///
    /// The scoring formulas assume their inputs are in range; callers must
    /// validate at admission, which [`super::service::NotificationService::submit`]
    /// does before mutating any state.
    pub fn validate(&self) -> Result<(), NotificationError> {
        if self.origin_app.is_empty() {
            return Err(NotificationError::InvalidData {
                field: "origin_app".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(1..=6).contains(&self.priority_tier) {
            return Err(NotificationError::InvalidData {
                field: "priority_tier".to_string(),
                reason: format!("{} is outside 1..=6", self.priority_tier),
            });
        }
        if !self.priority_score_raw.is_finite()
            || !(0.0..=50.0).contains(&self.priority_score_raw)
        {
            return Err(NotificationError::InvalidData {
                field: "priority_score_raw".to_string(),
                reason: format!("{} is outside [0, 50]", self.priority_score_raw),
            });
        }
        for (field, value) in [
            ("time_phase_bound", self.time_phase_bound),
            ("relevance", self.relevance),
            ("consequence", self.consequence),
            ("recency", self.recency),
        ] {
            if !(1..=10).contains(&value) {
                return Err(NotificationError::InvalidData {
                    field: field.to_string(),
                    reason: format!("{} is outside 1..=10", value),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Notification[{}] '{}' ({} from {})",
            self.id, self.message, self.category, self.origin_app
        )
    }
}

/// Aggregate counts over the notification log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NotificationStats {
    /// Every notification ever submitted and retained, dismissed or not.
    pub total: usize,
    /// Size of the capped active popup set.
    pub active: usize,
    /// Visible notifications not yet read.
    pub unread: usize,
    /// Soft-deleted notifications kept for audit.
    pub dismissed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serde_kebab_case() {
        let category = NotificationCategory::OperationalInfo;
        let serialized = serde_json::to_string(&category).unwrap();
        assert_eq!(serialized, "\"operational-info\"");
        let deserialized: NotificationCategory = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, category);
    }

    #[test]
    fn category_display() {
        assert_eq!(format!("{}", NotificationCategory::CrossApp), "Cross-App");
        assert_eq!(format!("{}", NotificationCategory::InApp), "In-App");
    }

    #[test]
    fn dismiss_reason_serde() {
        let reason = DismissReason::ByUser;
        let serialized = serde_json::to_string(&reason).unwrap();
        assert_eq!(serialized, "\"by-user\"");
        let deserialized: DismissReason = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, reason);
    }

    #[test]
    fn notification_new_defaults() {
        let notif = Notification::new("WiFi Store", NotificationCategory::System, "Link down");
        assert_eq!(notif.origin_app.as_str(), "WiFi Store");
        assert_eq!(notif.category, NotificationCategory::System);
        assert!(!notif.is_read);
        assert!(notif.is_visible);
        assert!(notif.validate().is_ok());
    }

    #[test]
    fn notification_flag_mutators() {
        let mut notif =
            Notification::new("Movies", NotificationCategory::InApp, "Up next");
        notif.mark_as_read();
        assert!(notif.is_read);
        notif.dismiss();
        assert!(!notif.is_visible);
    }

    #[test]
    fn validate_rejects_out_of_range_tier() {
        let notif = Notification::new("Movies", NotificationCategory::InApp, "Up next")
            .with_priority_tier(7);
        let err = notif.validate().unwrap_err();
        assert!(matches!(
            err,
            NotificationError::InvalidData { ref field, .. } if field == "priority_tier"
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_signals() {
        let notif = Notification::new("Movies", NotificationCategory::InApp, "Up next")
            .with_signals(0, 5, 5, 5);
        assert!(notif.validate().is_err());

        let notif = Notification::new("Movies", NotificationCategory::InApp, "Up next")
            .with_signals(5, 11, 5, 5);
        assert!(notif.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_priority_score() {
        let notif = Notification::new("Duty Free", NotificationCategory::Promotional, "Sale")
            .with_priority_score(51.0);
        assert!(notif.validate().is_err());

        let notif = Notification::new("Duty Free", NotificationCategory::Promotional, "Sale")
            .with_priority_score(f64::NAN);
        assert!(notif.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_origin_app() {
        let mut notif = Notification::new("Movies", NotificationCategory::InApp, "Up next");
        notif.origin_app = ApplicationId::from("");
        assert!(notif.validate().is_err());
    }

    #[test]
    fn notification_serde_roundtrip() {
        let notif = Notification::new("Duty Free", NotificationCategory::Promotional, "Sale")
            .with_priority_score(30.0)
            .with_signals(4, 8, 2, 9)
            .with_trigger("scheduled campaign");
        let serialized = serde_json::to_string(&notif).unwrap();
        let deserialized: Notification = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, notif);
    }

    #[test]
    fn notification_serde_defaults_flags() {
        // is_visible defaults to true when absent from the payload.
        let json = r#"{
            "id": "4f9c1c4e-2f64-4f5f-9d3a-0d8f5f3a9b1c",
            "origin_app": "Cabin Service",
            "category": "safety",
            "priority_tier": 1,
            "time_phase_bound": 10,
            "relevance": 10,
            "consequence": 10,
            "recency": 10,
            "message": "Fasten seatbelt",
            "created_at": "2026-08-24T12:00:00Z"
        }"#;
        let notif: Notification = serde_json::from_str(json).unwrap();
        assert!(notif.is_visible);
        assert!(!notif.is_read);
        assert_eq!(notif.priority_score_raw, 0.0);
    }
}
