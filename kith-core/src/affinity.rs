//! Friendship-affinity categories and their expected contact intervals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::answers::AnswerVector;
use crate::error::InvalidCategoryError;

/// Five closeness tiers, ordered closest -> most distant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AffinityCategory {
    #[serde(rename = "soul_mate")]
    SoulMate,
    #[serde(rename = "close_friend")]
    CloseFriend,
    #[serde(rename = "good_buddy")]
    GoodBuddy,
    #[serde(rename = "situational")]
    Situational,
    #[serde(rename = "distant")]
    Distant,
}

/// Upper (exclusive) mean cutoffs for the first four categories.
const AFFINITY_CUTOFFS: [(f64, AffinityCategory); 4] = [
    (0.8, AffinityCategory::SoulMate),
    (1.4, AffinityCategory::CloseFriend),
    (2.0, AffinityCategory::GoodBuddy),
    (2.6, AffinityCategory::Situational),
];

impl AffinityCategory {
    pub const ALL: [AffinityCategory; 5] = [
        AffinityCategory::SoulMate,
        AffinityCategory::CloseFriend,
        AffinityCategory::GoodBuddy,
        AffinityCategory::Situational,
        AffinityCategory::Distant,
    ];

    /// Bucket an overall answer mean.
    pub fn from_mean(mean: f64) -> Self {
        AFFINITY_CUTOFFS
            .iter()
            .find(|(cutoff, _)| mean < *cutoff)
            .map(|(_, category)| *category)
            .unwrap_or(AffinityCategory::Distant)
    }

    /// Expected days between contacts. Non-decreasing with distance.
    pub fn contact_interval_days(&self) -> u32 {
        match self {
            AffinityCategory::SoulMate => 3,
            AffinityCategory::CloseFriend => 7,
            AffinityCategory::GoodBuddy => 14,
            AffinityCategory::Situational => 30,
            AffinityCategory::Distant => 60,
        }
    }

    /// 0 for the closest category; used as a sort key.
    pub fn closeness_rank(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AffinityCategory::SoulMate => "soul_mate",
            AffinityCategory::CloseFriend => "close_friend",
            AffinityCategory::GoodBuddy => "good_buddy",
            AffinityCategory::Situational => "situational",
            AffinityCategory::Distant => "distant",
        }
    }
}

impl fmt::Display for AffinityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AffinityCategory {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AffinityCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidCategoryError(s.to_string()))
    }
}

/// Classify a whole answer vector by its single overall mean.
///
/// Deliberately independent of the per-dimension personality reduction.
pub fn classify_affinity(answers: &AnswerVector) -> AffinityCategory {
    AffinityCategory::from_mean(answers.overall_mean())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoffs_are_exclusive_upper() {
        assert_eq!(AffinityCategory::from_mean(0.0), AffinityCategory::SoulMate);
        assert_eq!(AffinityCategory::from_mean(0.79), AffinityCategory::SoulMate);
        assert_eq!(AffinityCategory::from_mean(0.8), AffinityCategory::CloseFriend);
        assert_eq!(AffinityCategory::from_mean(1.4), AffinityCategory::GoodBuddy);
        assert_eq!(AffinityCategory::from_mean(2.0), AffinityCategory::Situational);
        assert_eq!(AffinityCategory::from_mean(2.59), AffinityCategory::Situational);
        assert_eq!(AffinityCategory::from_mean(2.6), AffinityCategory::Distant);
        assert_eq!(AffinityCategory::from_mean(3.0), AffinityCategory::Distant);
    }

    #[test]
    fn intervals_non_decreasing_with_distance() {
        let intervals: Vec<_> = AffinityCategory::ALL
            .iter()
            .map(|c| c.contact_interval_days())
            .collect();
        assert!(intervals.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(intervals.first(), Some(&3));
        assert_eq!(intervals.last(), Some(&60));
    }

    #[test]
    fn parses_stored_strings() {
        assert_eq!("good_buddy".parse::<AffinityCategory>(), Ok(AffinityCategory::GoodBuddy));
        assert_eq!(
            "best_friend".parse::<AffinityCategory>(),
            Err(InvalidCategoryError("best_friend".to_string()))
        );
    }

    #[test]
    fn classifies_from_overall_mean() {
        let close = AnswerVector::try_new([0u8, 0, 1, 1, 1]).unwrap();
        assert_eq!(classify_affinity(&close), AffinityCategory::SoulMate);

        let far = AnswerVector::try_new([3u8, 3, 3, 2, 3]).unwrap();
        assert_eq!(classify_affinity(&far), AffinityCategory::Distant);

        // No answers: midpoint 1.5
        assert_eq!(classify_affinity(&AnswerVector::default()), AffinityCategory::GoodBuddy);
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&AffinityCategory::CloseFriend).unwrap();
        assert_eq!(json, "\"close_friend\"");
    }
}
