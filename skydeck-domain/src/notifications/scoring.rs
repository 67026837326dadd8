//! Pure scoring formulas for the notification engine.
//!
//! `score` computes a normalized relevance score in [0, 10] for a single
//! notification. The formula is selected by category and by whether the
//! notification's origin app matches the app the passenger currently has
//! open (the focus context). All functions here are pure and deterministic;
//! the service layer calls them under its own lock, and external callers may
//! use them freely to preview a score before submission.

use serde::{Deserialize, Serialize};

use super::types::{Notification, NotificationCategory};
use crate::shared_types::ApplicationId;

/// Raw maximum of the priority/consequence formulas (Safety, Operational
/// Info, System): inverted tier 10 + two 10-point signals.
const PRIORITY_RAW_MAX: f64 = 30.0;
/// Raw maximum of the within-app formula: four 10-point signals.
const WITHIN_APP_RAW_MAX: f64 = 40.0;
/// Raw maximum of the weighted cross-focus formula:
/// 0.40*3 + 0.25*4 + 0.20*10 + 0.15*10.
const CROSS_FOCUS_RAW_MAX: f64 = 5.7;

const W_CATEGORY_IMPORTANCE: f64 = 0.40;
const W_CASH_VALUE: f64 = 0.25;
const W_RELEVANCE: f64 = 0.20;
const W_RECENCY: f64 = 0.15;

/// Whether a notification originates from the passenger's currently open
/// app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusContext {
    /// Same app as the passenger's focus, or no focus context at all.
    Within,
    /// A different app than the passenger's focus.
    Cross,
}

/// Which formula produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreFormula {
    /// Inverted tier + relevance + consequence.
    SafetyOperational,
    /// Inverted tier + app relevance + consequence.
    UserSystem,
    /// Time/phase bound + relevance + consequence + recency.
    WithinApp,
    /// Weighted blend of category importance, cash value, relevance, recency.
    CrossFocusWeighted,
}

/// The intermediate values behind a score, for diagnostic display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub context: FocusContext,
    pub formula: ScoreFormula,
    pub raw: f64,
    pub raw_max: f64,
    /// The normalized result, `clamp(raw / raw_max * 10, 0, 10)`.
    pub score: f64,
}

/// Classifies a notification's origin against the focused app.
///
/// The match is a case-insensitive substring containment in either
/// direction, preserved from the original product behavior. It is loose by
/// design and can misclassify near-miss names (e.g. "App" matches
/// "Apple Pay"); do not tighten it to exact matching without revisiting the
/// trigger data. Absent a focused app, every notification classifies as
/// [`FocusContext::Within`], uniformly across categories.
pub fn classify_context(
    origin_app: &ApplicationId,
    focused_app: Option<&ApplicationId>,
) -> FocusContext {
    let Some(focused) = focused_app else {
        return FocusContext::Within;
    };
    let origin = origin_app.as_str().to_lowercase();
    let focused = focused.as_str().to_lowercase();
    if origin.contains(&focused) || focused.contains(&origin) {
        FocusContext::Within
    } else {
        FocusContext::Cross
    }
}

/// Business importance of a category on the 1..=3 scale used by the
/// cross-focus formula.
pub fn category_importance(category: NotificationCategory) -> f64 {
    match category {
        NotificationCategory::Safety => 3.0,
        NotificationCategory::OperationalInfo => 2.5,
        NotificationCategory::System => 2.0,
        NotificationCategory::CrossApp => 1.5,
        NotificationCategory::Promotional => 1.0,
        NotificationCategory::InApp => 1.0,
    }
}

/// Tier 1 is most urgent, so the score contribution is inverted: tier 1
/// contributes 10, tier 6 contributes 5.
fn invert_tier(tier: u8) -> f64 {
    11.0 - f64::from(tier)
}

/// Computes the normalized [0, 10] score together with the raw values that
/// produced it.
pub fn score_breakdown(
    notification: &Notification,
    focused_app: Option<&ApplicationId>,
) -> ScoreBreakdown {
    let context = classify_context(&notification.origin_app, focused_app);

    let (formula, raw, raw_max) = match notification.category {
        NotificationCategory::Safety | NotificationCategory::OperationalInfo => {
            let raw = invert_tier(notification.priority_tier)
                + f64::from(notification.relevance)
                + f64::from(notification.consequence);
            (ScoreFormula::SafetyOperational, raw, PRIORITY_RAW_MAX)
        }
        NotificationCategory::System => {
            let app_relevance = match context {
                FocusContext::Within => 10.0,
                FocusContext::Cross => f64::from(notification.relevance),
            };
            let raw = invert_tier(notification.priority_tier)
                + app_relevance
                + f64::from(notification.consequence);
            (ScoreFormula::UserSystem, raw, PRIORITY_RAW_MAX)
        }
        NotificationCategory::CrossApp
        | NotificationCategory::InApp
        | NotificationCategory::Promotional => match context {
            FocusContext::Within => {
                let raw = f64::from(notification.time_phase_bound)
                    + f64::from(notification.relevance)
                    + f64::from(notification.consequence)
                    + f64::from(notification.recency);
                (ScoreFormula::WithinApp, raw, WITHIN_APP_RAW_MAX)
            }
            FocusContext::Cross => {
                // Cash value scaled to (current / max) * 10 and clamped.
                let cash_value = (notification.priority_score_raw / 10.0).min(10.0);
                let raw = W_CATEGORY_IMPORTANCE * category_importance(notification.category)
                    + W_CASH_VALUE * cash_value
                    + W_RELEVANCE * f64::from(notification.relevance)
                    + W_RECENCY * f64::from(notification.recency);
                (ScoreFormula::CrossFocusWeighted, raw, CROSS_FOCUS_RAW_MAX)
            }
        },
    };

    ScoreBreakdown {
        context,
        formula,
        raw,
        raw_max,
        score: (raw / raw_max * 10.0).clamp(0.0, 10.0),
    }
}

/// Computes the normalized [0, 10] relevance score of a notification.
pub fn score(notification: &Notification, focused_app: Option<&ApplicationId>) -> f64 {
    score_breakdown(notification, focused_app).score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str) -> ApplicationId {
        ApplicationId::new(name)
    }

    #[test]
    fn context_defaults_to_within_without_focus() {
        assert_eq!(
            classify_context(&app("WiFi Store"), None),
            FocusContext::Within
        );
    }

    #[test]
    fn context_substring_matches_both_directions_case_insensitive() {
        assert_eq!(
            classify_context(&app("WiFi Store"), Some(&app("wifi"))),
            FocusContext::Within
        );
        assert_eq!(
            classify_context(&app("wifi"), Some(&app("WiFi Store"))),
            FocusContext::Within
        );
        assert_eq!(
            classify_context(&app("Duty Free"), Some(&app("movies"))),
            FocusContext::Cross
        );
    }

    #[test]
    fn context_substring_matching_is_loose() {
        // Preserved product behavior: "App" is contained in "Apple Pay".
        assert_eq!(
            classify_context(&app("App"), Some(&app("Apple Pay"))),
            FocusContext::Within
        );
    }

    #[test]
    fn safety_tier_one_full_signals_scores_exactly_ten() {
        let notif = Notification::new("Cabin", NotificationCategory::Safety, "Fasten seatbelt")
            .with_priority_tier(1)
            .with_signals(10, 10, 10, 10);
        assert_eq!(score(&notif, None), 10.0);
        // Tier inversion: tier 6 with the same signals scores lower.
        let weaker = Notification::new("Cabin", NotificationCategory::Safety, "Notice")
            .with_priority_tier(6)
            .with_signals(10, 10, 10, 10);
        assert!(score(&weaker, None) < 10.0);
    }

    #[test]
    fn operational_info_uses_the_safety_formula() {
        let safety = Notification::new("Flight Deck", NotificationCategory::Safety, "x")
            .with_priority_tier(2)
            .with_signals(5, 7, 9, 5);
        let ops = Notification::new("Flight Deck", NotificationCategory::OperationalInfo, "x")
            .with_priority_tier(2)
            .with_signals(5, 7, 9, 5);
        assert_eq!(score(&safety, None), score(&ops, None));
    }

    #[test]
    fn system_app_relevance_is_ten_within_focus() {
        let notif = Notification::new("WiFi Store", NotificationCategory::System, "Link down")
            .with_priority_tier(2)
            .with_signals(5, 4, 8, 5);
        // Within focus: (11-2) + 10 + 8 = 27.
        let within = score_breakdown(&notif, Some(&app("wifi")));
        assert_eq!(within.context, FocusContext::Within);
        assert_eq!(within.formula, ScoreFormula::UserSystem);
        assert!((within.raw - 27.0).abs() < f64::EPSILON);
        // Cross focus: (11-2) + 4 + 8 = 21.
        let cross = score_breakdown(&notif, Some(&app("Movies")));
        assert_eq!(cross.context, FocusContext::Cross);
        assert!((cross.raw - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cross_app_switches_formula_with_focus() {
        let notif = Notification::new("WiFi Store", NotificationCategory::CrossApp, "Plan ready")
            .with_priority_score(20.0)
            .with_signals(6, 7, 4, 9);
        // No focus context: within-app formula, (6+7+4+9)/40*10 = 6.5.
        let unfocused = score_breakdown(&notif, None);
        assert_eq!(unfocused.formula, ScoreFormula::WithinApp);
        assert!((unfocused.score - 6.5).abs() < 1e-9);
        // Focused on the origin app itself: still the within-app formula.
        let within = score_breakdown(&notif, Some(&app("wifi")));
        assert_eq!(within.formula, ScoreFormula::WithinApp);
        assert_eq!(within.score, unfocused.score);
        // Focused elsewhere: weighted cross-focus formula, different value.
        let cross = score_breakdown(&notif, Some(&app("Movies")));
        assert_eq!(cross.formula, ScoreFormula::CrossFocusWeighted);
        assert!((cross.score - unfocused.score).abs() > 1e-6);
    }

    #[test]
    fn promotional_cross_focus_weighted_value() {
        // importance 1.0, cash 30/10 = 3.0, relevance 8, recency 9:
        // 0.40*1.0 + 0.25*3.0 + 0.20*8 + 0.15*9 = 4.1 -> 4.1/5.7*10.
        let notif = Notification::new("Duty Free", NotificationCategory::Promotional, "Sale")
            .with_priority_score(30.0)
            .with_signals(4, 8, 2, 9);
        let breakdown = score_breakdown(&notif, Some(&app("movies")));
        assert_eq!(breakdown.formula, ScoreFormula::CrossFocusWeighted);
        assert!((breakdown.raw - 4.1).abs() < 1e-9);
        assert!((breakdown.score - 4.1 / 5.7 * 10.0).abs() < 1e-9);
        assert!((breakdown.score - 7.1930).abs() < 1e-3);
    }

    #[test]
    fn duty_free_cross_and_within_focus_diverge() {
        let notif = Notification::new("Duty Free", NotificationCategory::CrossApp, "Last call")
            .with_priority_score(30.0)
            .with_signals(4, 8, 2, 9);
        // Cross focus: importance 1.5, cash 3.0:
        // 0.40*1.5 + 0.25*3.0 + 0.20*8 + 0.15*9 = 4.3 -> 7.5439.
        let cross = score(&notif, Some(&app("movies")));
        assert!((cross - 4.3 / 5.7 * 10.0).abs() < 1e-9);
        // Within focus: (4+8+2+9)/40*10 = 5.75.
        let within = score(&notif, Some(&app("duty free")));
        assert!((within - 5.75).abs() < 1e-9);
        assert!((cross - within).abs() > 1e-6);
    }

    #[test]
    fn scores_stay_in_bounds_at_the_extremes() {
        for category in NotificationCategory::ALL {
            for (tier, signals, cash) in [(1u8, 10u8, 50.0), (6u8, 1u8, 0.0)] {
                let notif = Notification::new("Any App", category, "x")
                    .with_priority_tier(tier)
                    .with_priority_score(cash)
                    .with_signals(signals, signals, signals, signals);
                for focused in [None, Some(app("Any App")), Some(app("Elsewhere"))] {
                    let s = score(&notif, focused.as_ref());
                    assert!((0.0..=10.0).contains(&s), "{category:?} scored {s}");
                }
            }
        }
    }

    #[test]
    fn score_is_deterministic() {
        let notif = Notification::new("Movies", NotificationCategory::InApp, "Up next")
            .with_signals(3, 9, 2, 7);
        let focused = app("Shopping");
        assert_eq!(
            score(&notif, Some(&focused)),
            score(&notif, Some(&focused))
        );
    }

    #[test]
    fn cash_value_is_clamped_before_weighting() {
        // priority_score_raw at its 50 cap gives cash 5.0, well under the
        // clamp; the clamp guards hypothetical out-of-range admission.
        let mut notif = Notification::new("Shop", NotificationCategory::Promotional, "Mega sale")
            .with_signals(5, 10, 5, 10);
        notif.priority_score_raw = 500.0;
        let s = score(&notif, Some(&app("Movies")));
        assert!(s <= 10.0);
    }
}
