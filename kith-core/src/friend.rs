//! Friend records as read from the external store, plus the write-back seam.

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::affinity::AffinityCategory;
use crate::error::InvalidCategoryError;
use crate::health::{days_since, ContactAssessment};

/// The engine's slice of a friend record.
///
/// `category` stays the raw stored string so corrupted values surface as
/// [`InvalidCategoryError`] instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub last_interaction_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

impl FriendRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            last_interaction_date: None,
            birthday: None,
        }
    }

    pub fn with_category(mut self, category: AffinityCategory) -> Self {
        self.category = Some(category.as_str().to_string());
        self
    }

    /// Store a category string as-is, valid or not.
    pub fn with_raw_category(mut self, raw: impl Into<String>) -> Self {
        self.category = Some(raw.into());
        self
    }

    pub fn with_last_interaction(mut self, at: DateTime<Utc>) -> Self {
        self.last_interaction_date = Some(at);
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Parsed category; `Ok(None)` when the friend was never categorized.
    pub fn affinity(&self) -> Result<Option<AffinityCategory>, InvalidCategoryError> {
        self.category.as_deref().map(str::parse).transpose()
    }

    pub fn days_since_contact(&self, now: DateTime<Utc>) -> i64 {
        days_since(self.last_interaction_date, now)
    }

    /// Score this friend at `now`; `Ok(None)` when uncategorized.
    pub fn assess(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<ContactAssessment>, InvalidCategoryError> {
        Ok(self
            .affinity()?
            .map(|category| ContactAssessment::new(self.days_since_contact(now), category)))
    }
}

/// Assess every categorized friend, logging and skipping corrupted categories.
pub fn assess_all(
    friends: &[FriendRecord],
    now: DateTime<Utc>,
) -> Vec<(&FriendRecord, ContactAssessment)> {
    friends
        .iter()
        .filter_map(|friend| match friend.assess(now) {
            Ok(assessment) => assessment.map(|a| (friend, a)),
            Err(err) => {
                tracing::warn!(friend_id = %friend.id, error = %err, "treating friend as uncategorized");
                None
            }
        })
        .collect()
}

/// Persistence seam for the one field the engine writes.
pub trait FriendStore {
    fn record_interaction(&mut self, friend_id: &str, at: DateTime<Utc>) -> Result<()>;
}

impl FriendStore for Vec<FriendRecord> {
    fn record_interaction(&mut self, friend_id: &str, at: DateTime<Utc>) -> Result<()> {
        let friend = self
            .iter_mut()
            .find(|f| f.id == friend_id)
            .ok_or_else(|| anyhow!("unknown friend: {friend_id}"))?;
        friend.last_interaction_date = Some(at);
        Ok(())
    }
}

/// The user acted on a reminder: reset the friend's contact clock.
pub fn acknowledge_reminder<S: FriendStore + ?Sized>(
    store: &mut S,
    friend_id: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    store.record_interaction(friend_id, now)?;
    tracing::debug!(friend_id, "reminder acknowledged");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 18, 30, 0).unwrap()
    }

    #[test]
    fn affinity_states() {
        let none = FriendRecord::new("f1", "Ana");
        assert_eq!(none.affinity(), Ok(None));

        let ok = FriendRecord::new("f2", "Ben").with_category(AffinityCategory::CloseFriend);
        assert_eq!(ok.affinity(), Ok(Some(AffinityCategory::CloseFriend)));

        let bad = FriendRecord::new("f3", "Cy").with_raw_category("frenemy");
        assert_eq!(bad.affinity(), Err(InvalidCategoryError("frenemy".to_string())));
    }

    #[test]
    fn assess_all_skips_uncategorized_and_corrupted() {
        let friends = vec![
            FriendRecord::new("a", "A")
                .with_category(AffinityCategory::SoulMate)
                .with_last_interaction(now() - Duration::days(6)),
            FriendRecord::new("b", "B"),
            FriendRecord::new("c", "C").with_raw_category("???"),
        ];
        let assessed = assess_all(&friends, now());
        assert_eq!(assessed.len(), 1);
        assert_eq!(assessed[0].0.id, "a");
        assert_eq!(assessed[0].1.ratio, 2.0);
    }

    #[test]
    fn acknowledge_writes_back_last_interaction() {
        let mut friends = vec![FriendRecord::new("a", "A").with_category(AffinityCategory::Distant)];
        acknowledge_reminder(&mut friends, "a", now()).unwrap();
        assert_eq!(friends[0].last_interaction_date, Some(now()));
        assert_eq!(friends[0].days_since_contact(now()), 0);

        assert!(acknowledge_reminder(&mut friends, "missing", now()).is_err());
    }

    #[test]
    fn json_keys_are_camel_case() {
        let f = FriendRecord::new("a", "A")
            .with_category(AffinityCategory::SoulMate)
            .with_last_interaction(now());
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["lastInteractionDate"], "2026-05-04T18:30:00Z");
        assert_eq!(json["category"], "soul_mate");
        assert!(json.get("last_interaction_date").is_none());

        let back: FriendRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn deserializes_sparse_records() {
        let f: FriendRecord = serde_json::from_str(r#"{"id":"x","birthday":"1990-07-14"}"#).unwrap();
        assert_eq!(f.birthday, NaiveDate::from_ymd_opt(1990, 7, 14));
        assert!(f.category.is_none());
    }
}
