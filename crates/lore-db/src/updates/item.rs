//! Learning item update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lore_core::entities::LearningItem;
use lore_core::enums::{LearningCategory, LearningStatus};
use lore_core::errors::CoreError;
use lore_core::lifecycle;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LearningCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LearningStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<Option<DateTime<Utc>>>,
}

impl ItemUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.source.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.status.is_none()
            && self.note.is_none()
            && self.due_at.is_none()
    }

    /// Apply the set fields to `item`.
    ///
    /// A status change goes through [`lifecycle::set_status`], so completion
    /// and queue flags stay consistent. Setting the current status again
    /// leaves `completed_at` alone.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the result has a blank title or
    /// source; `item` may be partially modified in that case.
    pub fn apply_to(&self, item: &mut LearningItem, now: DateTime<Utc>) -> Result<(), CoreError> {
        if let Some(ref title) = self.title {
            item.title = title.trim().to_string();
        }
        if let Some(ref url) = self.url {
            item.url = url.trim().to_string();
        }
        if let Some(ref source) = self.source {
            item.source = source.trim().to_string();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(ref tags) = self.tags {
            item.tags = lifecycle::normalize_tags(tags);
        }
        if let Some(status) = self.status {
            if status != item.status {
                lifecycle::set_status(item, status, now);
            }
        }
        if let Some(ref note) = self.note {
            lifecycle::update_note(item, note.clone());
        }
        if let Some(due_at) = self.due_at {
            item.due_at = due_at;
        }

        if item.title.is_empty() || item.source.is_empty() {
            return Err(CoreError::Validation(
                "title and source must not be blank".into(),
            ));
        }
        Ok(())
    }
}

pub struct ItemUpdateBuilder(ItemUpdate);

impl Default for ItemUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ItemUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.0.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.0.source = Some(source.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: LearningCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.0.tags = Some(tags);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: LearningStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.0.note = Some(note.into());
        self
    }

    #[must_use]
    pub const fn due_at(mut self, due_at: Option<DateTime<Utc>>) -> Self {
        self.0.due_at = Some(due_at);
        self
    }

    #[must_use]
    pub fn build(self) -> ItemUpdate {
        self.0
    }
}
