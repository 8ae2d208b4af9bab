//! Per-friend contact urgency and health scoring.
//!
//! Everything derives from the decay ratio `days_since / interval`. The score
//! bands (1.0 / 1.5 / 2.0) and the urgency tiers (1.5 / 2.0) are separate
//! tables and disagree on purpose: ratio 1.2 is `Low` urgency but scores 70.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::affinity::AffinityCategory;

/// Days-since value used for a friend who was never contacted.
pub const NEVER_CONTACTED_DAYS: i64 = 9999;

/// How overdue a contact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    High = 0,
    Medium = 1,
    Low = 2,
}

impl UrgencyTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 2.0 {
            UrgencyTier::High
        } else if ratio >= 1.5 {
            UrgencyTier::Medium
        } else {
            UrgencyTier::Low
        }
    }

    /// Sort rank, `High` first.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// Whole days between `last` and `now`, floored and never negative.
pub fn days_since(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match last {
        Some(at) => (now - at).num_days().max(0),
        None => NEVER_CONTACTED_DAYS,
    }
}

/// `days_since / interval` for the category.
pub fn decay_ratio(days_since: i64, category: AffinityCategory) -> f64 {
    days_since.max(0) as f64 / f64::from(category.contact_interval_days())
}

/// Piecewise 0-100 freshness score for a decay ratio.
///
/// Band edges are inclusive on the upper side: ratio 1.5 scores 70 and 2.0
/// scores 40, even though those same ratios already move the urgency tier.
pub fn health_score(ratio: f64) -> u8 {
    if ratio <= 1.0 {
        100
    } else if ratio <= 1.5 {
        70
    } else if ratio <= 2.0 {
        40
    } else {
        // 20 at ratio 2, 0 at ratio 4, clamped past that.
        (20.0 - (ratio - 2.0) * 10.0).clamp(0.0, 100.0).round() as u8
    }
}

/// Scored view of one friend's contact state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAssessment {
    pub category: AffinityCategory,
    pub days_since: i64,
    pub ratio: f64,
    pub score: u8,
    pub tier: UrgencyTier,
}

impl ContactAssessment {
    pub fn new(days_since: i64, category: AffinityCategory) -> Self {
        let ratio = decay_ratio(days_since, category);
        Self {
            category,
            days_since,
            ratio,
            score: health_score(ratio),
            tier: UrgencyTier::from_ratio(ratio),
        }
    }

    /// Contact has reached or passed the category interval.
    pub fn needs_reminder(&self) -> bool {
        self.ratio >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at_ratio(ratio: f64) -> ContactAssessment {
        // Distant: 60-day interval, so every ratio below is a whole day count.
        let days = (ratio * 60.0).round() as i64;
        ContactAssessment::new(days, AffinityCategory::Distant)
    }

    #[test]
    fn fresh_contact() {
        let a = ContactAssessment::new(0, AffinityCategory::SoulMate);
        assert_eq!(a.score, 100);
        assert_eq!(a.tier, UrgencyTier::Low);
        assert!(!a.needs_reminder());
    }

    #[test]
    fn score_and_tier_bands() {
        let a = at_ratio(1.0);
        assert_eq!((a.score, a.tier), (100, UrgencyTier::Low));
        assert!(a.needs_reminder());

        let a = at_ratio(1.2);
        assert_eq!((a.score, a.tier), (70, UrgencyTier::Low));

        let a = at_ratio(1.5);
        assert_eq!((a.score, a.tier), (70, UrgencyTier::Medium));

        let a = at_ratio(1.75);
        assert_eq!((a.score, a.tier), (40, UrgencyTier::Medium));

        let a = at_ratio(2.0);
        assert_eq!((a.score, a.tier), (40, UrgencyTier::High));

        let a = at_ratio(3.0);
        assert_eq!((a.score, a.tier), (10, UrgencyTier::High));

        let a = at_ratio(4.0);
        assert_eq!((a.score, a.tier), (0, UrgencyTier::High));

        let a = at_ratio(10.0);
        assert_eq!(a.score, 0);
    }

    #[test]
    fn band_edges_belong_to_the_lower_band() {
        assert_eq!(health_score(1.0), 100);
        assert_eq!(health_score(1.5), 70);
        assert_eq!(health_score(2.0), 40);
        assert_eq!(UrgencyTier::from_ratio(1.5), UrgencyTier::Medium);
        assert_eq!(UrgencyTier::from_ratio(2.0), UrgencyTier::High);
    }

    #[test]
    fn taper_just_past_two() {
        assert_eq!(health_score(2.2), 18);
        assert_eq!(health_score(2.5), 15);
    }

    #[test]
    fn never_contacted_is_maximally_overdue() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let days = days_since(None, now);
        assert_eq!(days, NEVER_CONTACTED_DAYS);
        let a = ContactAssessment::new(days, AffinityCategory::Distant);
        assert_eq!(a.score, 0);
        assert_eq!(a.tier, UrgencyTier::High);
    }

    #[test]
    fn days_since_floors_and_clamps() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(days_since(Some(now - Duration::hours(47)), now), 1);
        assert_eq!(days_since(Some(now - Duration::days(7)), now), 7);
        assert_eq!(days_since(Some(now + Duration::days(2)), now), 0);
    }

    #[test]
    fn tiers_sort_high_first() {
        let mut tiers = vec![UrgencyTier::Low, UrgencyTier::High, UrgencyTier::Medium];
        tiers.sort();
        assert_eq!(tiers, [UrgencyTier::High, UrgencyTier::Medium, UrgencyTier::Low]);
    }
}
