//! Dashboard aggregation over the whole library.

use lore_core::entities::LearningItem;
use lore_core::enums::LearningStatus;
use lore_core::views::{self, Dashboard, Summary};

use crate::error::DatabaseError;
use crate::service::LoreService;

impl LoreService {
    /// Counts straight from the store, read in one statement.
    pub async fn summary(&self) -> Result<Summary, DatabaseError> {
        self.db().count_summary().await
    }

    pub async fn dashboard(&self) -> Result<Dashboard, DatabaseError> {
        let items = self.db().list_items().await?;
        Ok(views::dashboard(&items, self.next_up_window()))
    }

    pub async fn current_tasks(&self) -> Result<Vec<LearningItem>, DatabaseError> {
        self.db().list_items_by_status(LearningStatus::InProgress).await
    }

    pub async fn queued_items(&self) -> Result<Vec<LearningItem>, DatabaseError> {
        let items = self.db().list_items_by_status(LearningStatus::Todo).await?;
        Ok(views::queued_items(&items))
    }

    pub async fn completed_items(&self) -> Result<Vec<LearningItem>, DatabaseError> {
        let items = self.db().list_items_by_status(LearningStatus::Done).await?;
        Ok(views::completed_items(&items))
    }

    pub async fn next_up(&self) -> Result<Vec<LearningItem>, DatabaseError> {
        let items = self.db().list_items().await?;
        Ok(views::next_up(&items, self.next_up_window()))
    }
}
