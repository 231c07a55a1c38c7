//! Entity structs for Lore domain objects.
//!
//! `LearningItem` maps to the `learning_items` table in `lore-db`. Suggestions
//! and drafts are never persisted directly. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod draft;
mod item;
mod suggestion;

pub use draft::ItemDraft;
pub use item::LearningItem;
pub use suggestion::BrowseSuggestion;
