use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{LearningCategory, LearningStatus};
use crate::errors::CoreError;

/// Edit-form payload for creating a learning item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub category: LearningCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: LearningStatus,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    /// `None` keeps the existing note (or an empty one for new items).
    #[serde(default)]
    pub note: Option<String>,
}

impl ItemDraft {
    /// A todo draft with only the required fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            url: String::new(),
            category: LearningCategory::default(),
            tags: Vec::new(),
            status: LearningStatus::Todo,
            due_at: None,
            note: None,
        }
    }

    /// Reject drafts with a blank title or source.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the missing fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.source.trim().is_empty() {
            missing.push("source");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "{} must not be blank",
                missing.join(" and ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_passes() {
        assert!(ItemDraft::new("Deep Work", "Medium").validate().is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        let err = ItemDraft::new("   ", "Medium").validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg == "title must not be blank"));
    }

    #[test]
    fn blank_title_and_source_reported_together() {
        let err = ItemDraft::new("", "\t").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: title and source must not be blank"
        );
    }
}
