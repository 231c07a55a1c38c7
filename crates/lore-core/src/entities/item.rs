use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{LearningCategory, LearningStatus};

/// A course, video, book, or podcast tracked through the learning lifecycle.
///
/// `id == 0` marks an instance that has not been inserted yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningItem {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub source: String,
    #[serde(default)]
    pub category: LearningCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: LearningStatus,
    /// Staged for a future start. Only meaningful while `status` is `todo`.
    #[serde(default)]
    pub queued: bool,
    #[serde(default)]
    pub note: String,
    pub added_at: DateTime<Utc>,
    /// Present exactly when `status` is `done`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional target date; dated items sort first in "next up".
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    /// Row version, bumped by the store on every write.
    #[serde(default)]
    pub version: i64,
}

impl LearningItem {
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Case-insensitive exact tag membership. Surrounding whitespace in the
    /// query is ignored.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.tags
            .iter()
            .any(|t| t.trim().to_lowercase() == wanted)
    }

    /// Timestamp used to order completed items: completion time, falling
    /// back to the time the item was added.
    #[must_use]
    pub fn completion_sort_key(&self) -> DateTime<Utc> {
        self.completed_at.unwrap_or(self.added_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(tags: &[&str]) -> LearningItem {
        LearningItem {
            id: 0,
            title: "Rust Atomics".into(),
            url: String::new(),
            source: "O'Reilly".into(),
            category: LearningCategory::Book,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            status: LearningStatus::Todo,
            queued: false,
            note: String::new(),
            added_at: Utc.timestamp_millis_opt(1_000).unwrap(),
            completed_at: None,
            due_at: None,
            version: 0,
        }
    }

    #[test]
    fn unsaved_item_is_not_persisted() {
        let mut it = item(&[]);
        assert!(!it.is_persisted());
        it.id = 7;
        assert!(it.is_persisted());
    }

    #[test]
    fn has_tag_ignores_case_and_padding() {
        let it = item(&["Concurrency", " rust "]);
        assert!(it.has_tag("concurrency"));
        assert!(it.has_tag("RUST"));
        assert!(it.has_tag("  rust"));
        assert!(!it.has_tag("conc"));
    }

    #[test]
    fn completion_sort_key_falls_back_to_added_at() {
        let mut it = item(&[]);
        assert_eq!(it.completion_sort_key(), it.added_at);
        let done = Utc.timestamp_millis_opt(9_000).unwrap();
        it.completed_at = Some(done);
        assert_eq!(it.completion_sort_key(), done);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{
            "title": "Systems Thinking 101",
            "source": "Coursera",
            "status": "todo",
            "added_at": "2026-01-01T00:00:00Z",
            "completed_at": null
        }"#;
        let it: LearningItem = serde_json::from_str(json).unwrap();
        assert_eq!(it.id, 0);
        assert_eq!(it.category, LearningCategory::Course);
        assert!(it.tags.is_empty());
        assert!(!it.queued);
        assert_eq!(it.due_at, None);
    }
}
