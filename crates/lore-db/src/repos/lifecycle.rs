//! Lifecycle operations: status changes, queueing, notes, edits and deletes.
//!
//! Each mutation is a read-modify-write of one row guarded by the row
//! `version`. A missing id yields `Ok(None)` without writing.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use lore_core::entities::{ItemDraft, LearningItem};
use lore_core::enums::LearningStatus;
use lore_core::lifecycle;

use crate::error::DatabaseError;
use crate::helpers::now_millis;
use crate::service::LoreService;
use crate::updates::item::ItemUpdate;

impl LoreService {
    /// Re-read, apply and compare-and-swap until the write lands, the row
    /// disappears, or the retry budget runs out.
    ///
    /// On success the returned item is exactly the row this call wrote.
    async fn mutate_item<F>(
        &self,
        id: i64,
        op: &'static str,
        mut apply: F,
    ) -> Result<Option<LearningItem>, DatabaseError>
    where
        F: FnMut(&mut LearningItem, DateTime<Utc>) -> Result<(), DatabaseError>,
    {
        let mut attempt = 1;
        loop {
            let Some(current) = self.db().find_item(id).await? else {
                debug!(id, op, "item not found, nothing written");
                return Ok(None);
            };

            let mut next = current.clone();
            apply(&mut next, now_millis())?;

            if self.db().update_item_if_version(&next, current.version).await? {
                next.id = current.id;
                next.added_at = current.added_at;
                next.version = current.version + 1;
                debug!(id, op, version = next.version, "item updated");
                return Ok(Some(next));
            }

            if attempt >= self.retry().max_attempts {
                warn!(id, op, attempts = attempt, "giving up on contended item");
                return Err(DatabaseError::Conflict {
                    id,
                    attempts: attempt,
                });
            }
            warn!(id, op, attempt, "concurrent write detected, retrying");
            tokio::time::sleep(self.retry().delay_for(attempt)).await;
            attempt += 1;
        }
    }

    pub async fn get_item(&self, id: i64) -> Result<Option<LearningItem>, DatabaseError> {
        self.db().find_item(id).await
    }

    pub async fn set_status(
        &self,
        id: i64,
        status: LearningStatus,
    ) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "set_status", |item, now| {
            lifecycle::set_status(item, status, now);
            Ok(())
        })
        .await
    }

    /// Advance `todo → in_progress → done → todo`.
    pub async fn toggle_status(&self, id: i64) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "toggle_status", |item, now| {
            lifecycle::toggle_status(item, now);
            Ok(())
        })
        .await
    }

    pub async fn start_item(&self, id: i64) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "start_item", |item, now| {
            lifecycle::start_item(item, now);
            Ok(())
        })
        .await
    }

    pub async fn complete_item(&self, id: i64) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "complete_item", |item, now| {
            lifecycle::complete_item(item, now);
            Ok(())
        })
        .await
    }

    pub async fn move_to_queue(&self, id: i64) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "move_to_queue", |item, _| {
            lifecycle::move_to_queue(item);
            Ok(())
        })
        .await
    }

    pub async fn add_to_queue(&self, id: i64) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "add_to_queue", |item, _| {
            lifecycle::add_to_queue(item);
            Ok(())
        })
        .await
    }

    pub async fn remove_from_queue(&self, id: i64) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "remove_from_queue", |item, _| {
            lifecycle::remove_from_queue(item);
            Ok(())
        })
        .await
    }

    pub async fn update_note(
        &self,
        id: i64,
        note: &str,
    ) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "update_note", |item, _| {
            lifecycle::update_note(item, note);
            Ok(())
        })
        .await
    }

    /// Apply a partial update.
    pub async fn update_item(
        &self,
        id: i64,
        update: &ItemUpdate,
    ) -> Result<Option<LearningItem>, DatabaseError> {
        self.mutate_item(id, "update_item", |item, now| {
            update.apply_to(item, now).map_err(DatabaseError::from)
        })
        .await
    }

    /// Insert a new item built from an edit-form draft and return it as
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank title or source.
    pub async fn create_item(&self, draft: ItemDraft) -> Result<LearningItem, DatabaseError> {
        let item = lifecycle::new_item(draft, now_millis())?;
        let id = self.db().insert_item(&item).await?;
        debug!(id, title = %item.title, "item created");
        Ok(LearningItem {
            id,
            version: 1,
            ..item
        })
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete_item(&self, id: i64) -> Result<bool, DatabaseError> {
        let deleted = self.db().delete_item(id).await?;
        if !deleted {
            debug!(id, "item not found, nothing deleted");
        }
        Ok(deleted)
    }
}
