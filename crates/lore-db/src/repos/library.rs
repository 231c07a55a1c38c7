//! Library filtering and tag vocabulary.

use lore_core::entities::LearningItem;
use lore_core::enums::LearningStatus;
use lore_core::views::{self, ItemFilter};

use crate::error::DatabaseError;
use crate::service::LoreService;

impl LoreService {
    /// A filter using the configured tag-matching mode.
    #[must_use]
    pub fn library_filter(&self, status: Option<LearningStatus>, tag: Option<String>) -> ItemFilter {
        ItemFilter {
            status,
            tag,
            mode: self.search_mode(),
        }
    }

    /// Library items matching `filter`, newest first.
    pub async fn filtered_items(
        &self,
        filter: &ItemFilter,
    ) -> Result<Vec<LearningItem>, DatabaseError> {
        let items = self.db().list_items().await?;
        Ok(views::filter_items(&items, filter))
    }

    pub async fn distinct_tags(&self) -> Result<Vec<String>, DatabaseError> {
        let items = self.db().list_items().await?;
        Ok(views::distinct_tags(&items))
    }
}
