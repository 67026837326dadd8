//! Global ranking order for notifications.
//!
//! The order is a stable total order: primary key is the fixed category
//! priority class, secondary key is the computed score, descending. Ties are
//! broken by the stable sort preserving prior relative order, which keeps
//! the output reproducible across repeated calls with identical input.

use super::scoring::score;
use super::types::{Notification, NotificationCategory};
use crate::shared_types::ApplicationId;

/// Fixed ordinal determining the primary sort order. Lower sorts first.
///
/// Distinct from a notification's editorial `priority_tier`.
pub fn priority_class(category: NotificationCategory) -> u8 {
    match category {
        NotificationCategory::Safety => 1,
        NotificationCategory::OperationalInfo => 2,
        NotificationCategory::System => 3,
        NotificationCategory::CrossApp => 4,
        NotificationCategory::Promotional => 5,
        NotificationCategory::InApp => 6,
    }
}

/// Sorts notifications in place into the global display order under the
/// given focus context.
///
/// Scores are computed once per notification before sorting; `rank` is
/// idempotent.
pub fn rank(notifications: &mut Vec<Notification>, focused_app: Option<&ApplicationId>) {
    let mut keyed: Vec<(f64, Notification)> = notifications
        .drain(..)
        .map(|n| (score(&n, focused_app), n))
        .collect();

    keyed.sort_by(|(score_a, a), (score_b, b)| {
        priority_class(a.category)
            .cmp(&priority_class(b.category))
            .then_with(|| {
                score_b
                    .partial_cmp(score_a)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });

    notifications.extend(keyed.into_iter().map(|(_, n)| n));
}
