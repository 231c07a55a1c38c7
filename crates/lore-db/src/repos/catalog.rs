//! Browse catalog: listing suggestions and importing them into the library.

use tracing::info;

use lore_core::catalog::{self, BrowseEvent, SuggestionView};
use lore_core::entities::BrowseSuggestion;

use crate::error::DatabaseError;
use crate::helpers::now_millis;
use crate::service::LoreService;

impl LoreService {
    /// The built-in catalog, each entry marked if its url is already saved.
    pub async fn list_suggestions(&self) -> Result<Vec<SuggestionView>, DatabaseError> {
        let items = self.db().list_items().await?;
        Ok(catalog::annotate(catalog::default_suggestions(), &items))
    }

    /// Import `suggestion` unless an item with the same url exists. The check
    /// and the insert are one statement, so concurrent imports of one url
    /// add it once.
    ///
    /// The outcome is returned and also published to catalog event
    /// subscribers.
    pub async fn add_to_library(
        &self,
        suggestion: &BrowseSuggestion,
    ) -> Result<BrowseEvent, DatabaseError> {
        let item = catalog::to_item(suggestion, now_millis());
        let event = match self.db().insert_item_if_url_absent(&item).await? {
            Some(id) => {
                info!(id, url = %suggestion.url, "suggestion added to library");
                BrowseEvent::AddedToLibrary {
                    title: suggestion.title.clone(),
                    id,
                }
            }
            None => {
                info!(url = %suggestion.url, "suggestion already in library");
                BrowseEvent::AlreadyInLibrary {
                    title: suggestion.title.clone(),
                }
            }
        };
        self.publish_catalog_event(&event);
        Ok(event)
    }
}
