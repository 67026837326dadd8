//! Curated sample notifications for demos and seeded stores.
//!
//! Mirrors the hand-authored data set shipped with the cabin UI; loaded via
//! [`super::service::NotificationService::load_sample`].

use super::types::{Notification, NotificationCategory};

/// A representative set of inflight notifications covering every category.
pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            "Cabin Crew",
            NotificationCategory::Safety,
            "Fasten your seatbelt: turbulence ahead",
        )
        .with_priority_tier(1)
        .with_signals(10, 10, 10, 10)
        .with_trigger("seatbelt sign on"),
        Notification::new(
            "Flight Deck",
            NotificationCategory::OperationalInfo,
            "We have started our descent into Los Angeles",
        )
        .with_priority_tier(2)
        .with_signals(8, 9, 6, 8)
        .with_trigger("flight phase change: descent"),
        Notification::new(
            "WiFi Store",
            NotificationCategory::System,
            "Your WiFi session expires in 10 minutes",
        )
        .with_priority_tier(3)
        .with_signals(7, 6, 7, 8)
        .with_trigger("session timer"),
        Notification::new(
            "Cabin Service",
            NotificationCategory::CrossApp,
            "Meal service begins in 15 minutes",
        )
        .with_priority_tier(3)
        .with_priority_score(10.0)
        .with_signals(7, 6, 4, 7)
        .with_trigger("service schedule"),
        Notification::new(
            "Duty Free",
            NotificationCategory::Promotional,
            "Last call: 20% off fragrances before landing",
        )
        .with_priority_tier(5)
        .with_priority_score(30.0)
        .with_signals(4, 5, 2, 9)
        .with_trigger("scheduled campaign"),
        Notification::new(
            "Movies",
            NotificationCategory::InApp,
            "Up next: the second part of your double feature",
        )
        .with_priority_tier(4)
        .with_signals(6, 8, 3, 9)
        .with_trigger("playback queue"),
        Notification::new(
            "Duty Free",
            NotificationCategory::CrossApp,
            "Your pre-ordered items are ready for pickup",
        )
        .with_priority_tier(4)
        .with_priority_score(25.0)
        .with_signals(5, 7, 5, 6)
        .with_trigger("order fulfilled"),
    ]
}
