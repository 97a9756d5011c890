//! Per-user mood history.
//!
//! Each served recommendation for a signed-in user is logged with the mood
//! they reported and the movie in the safe slot. Entries live in memory for
//! the lifetime of the process; persisting them is the storage layer's job.

use catalog::{Intensity, PrimaryMood};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identifier assigned by the account system
pub type UserId = String;

/// One served recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub mood: PrimaryMood,
    pub intensity: Intensity,
    pub movie_title: String,
}

/// Shared, append-only history log.
///
/// Cloning is cheap; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MoodHistory {
    entries: Arc<RwLock<HashMap<UserId, Vec<HistoryEntry>>>>,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to its user's log
    pub async fn record(&self, entry: HistoryEntry) {
        let mut entries = self.entries.write().await;
        entries
            .entry(entry.user_id.clone())
            .or_insert_with(Vec::new)
            .push(entry);
    }

    /// A user's entries, oldest first. Empty for unknown users.
    pub async fn for_user(&self, user_id: &str) -> Vec<HistoryEntry> {
        let entries = self.entries.read().await;
        entries.get(user_id).cloned().unwrap_or_default()
    }

    /// Total number of entries across all users
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().map(|v| v.len()).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
