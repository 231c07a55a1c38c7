//! CLI response types returned as JSON by `lore` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::SuggestionView;
use crate::entities::LearningItem;
use crate::views::ItemFilter;

/// Response from `lore list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemListResponse {
    pub filter: ItemFilter,
    pub items: Vec<LearningItem>,
    pub total: u32,
}

/// Response from `lore tags`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

/// Response from `lore browse list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogResponse {
    pub suggestions: Vec<SuggestionView>,
}

/// Response from `lore delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}
