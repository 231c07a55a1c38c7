use lore_core::catalog::{BrowseEvent, SuggestionView};
use lore_core::entities::{BrowseSuggestion, ItemDraft, LearningItem};
use lore_core::responses::{CatalogResponse, DeleteResponse, ItemListResponse, TagsResponse};
use lore_core::views::{Dashboard, ItemFilter, Summary};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `lore schema`.
pub const SCHEMA_NAMES: [&str; 12] = [
    "item",
    "draft",
    "suggestion",
    "suggestion-view",
    "browse-event",
    "filter",
    "summary",
    "dashboard",
    "item-list",
    "tags",
    "catalog",
    "delete",
];

/// Handle `lore schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(&args.type_name)?, flags.format)
}

fn schema_value(name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "item" => schema_for!(LearningItem),
        "draft" => schema_for!(ItemDraft),
        "suggestion" => schema_for!(BrowseSuggestion),
        "suggestion-view" => schema_for!(SuggestionView),
        "browse-event" => schema_for!(BrowseEvent),
        "filter" => schema_for!(ItemFilter),
        "summary" => schema_for!(Summary),
        "dashboard" => schema_for!(Dashboard),
        "item-list" => schema_for!(ItemListResponse),
        "tags" => schema_for!(TagsResponse),
        "catalog" => schema_for!(CatalogResponse),
        "delete" => schema_for!(DeleteResponse),
        _ => anyhow::bail!(
            "unknown schema type '{name}'; expected one of: {}",
            SCHEMA_NAMES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in SCHEMA_NAMES {
            let schema = schema_value(name).expect("schema should resolve");
            assert!(schema.is_object(), "{name}");
        }
    }

    #[test]
    fn item_schema_lists_core_fields() {
        let schema = schema_value("item").unwrap();
        let properties = schema["properties"].as_object().expect("properties");
        for field in ["title", "status", "queued", "completed_at", "tags"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn underscore_spelling_is_accepted() {
        assert!(schema_value("browse_event").is_ok());
    }

    #[test]
    fn unknown_name_lists_choices() {
        let err = schema_value("session").expect_err("should fail");
        assert!(err.to_string().contains("item-list"));
    }
}
