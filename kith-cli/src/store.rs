//! Friend records kept in a local JSON file.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use kith_core::{FriendRecord, FriendStore};
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonFriendStore {
    path: PathBuf,
    friends: Vec<FriendRecord>,
}

impl JsonFriendStore {
    /// Load the store; a missing file is an empty circle.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let friends = if path.exists() {
            let s = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
            serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?
        } else {
            Vec::new()
        };
        Ok(Self { path, friends })
    }

    pub fn friends(&self) -> &[FriendRecord] {
        &self.friends
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.friends)?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

impl FriendStore for JsonFriendStore {
    fn record_interaction(&mut self, friend_id: &str, at: DateTime<Utc>) -> Result<()> {
        self.friends.record_interaction(friend_id, at)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kith_core::{acknowledge_reminder, AffinityCategory};

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFriendStore::open(dir.path().join("friends.json")).unwrap();
        assert!(store.friends().is_empty());
    }

    #[test]
    fn acknowledge_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("friends.json");
        let seed = vec![FriendRecord::new("ana", "Ana").with_category(AffinityCategory::GoodBuddy)];
        fs::write(&path, serde_json::to_string(&seed).unwrap()).unwrap();

        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let mut store = JsonFriendStore::open(&path).unwrap();
        acknowledge_reminder(&mut store, "ana", at).unwrap();

        let reloaded = JsonFriendStore::open(&path).unwrap();
        assert_eq!(reloaded.friends()[0].last_interaction_date, Some(at));
    }

    #[test]
    fn corrupted_category_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("friends.json");
        fs::write(&path, r#"[{"id":"x","name":"X","category":"frenemy"}]"#).unwrap();
        let store = JsonFriendStore::open(&path).unwrap();
        assert!(store.friends()[0].affinity().is_err());
    }
}
