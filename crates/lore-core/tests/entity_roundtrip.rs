//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::{TimeZone, Utc};
use lore_core::catalog::{BrowseEvent, SuggestionView, default_suggestions};
use lore_core::entities::*;
use lore_core::enums::*;
use lore_core::responses::*;
use lore_core::views::{Dashboard, ItemFilter, Summary};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_item() -> LearningItem {
    LearningItem {
        id: 7,
        title: "Systems Thinking 101".into(),
        url: "https://www.coursera.org/learn/systems-thinking".into(),
        source: "Coursera".into(),
        category: LearningCategory::Course,
        tags: vec!["Systems".into(), "Strategy".into()],
        status: LearningStatus::Done,
        queued: false,
        note: "week 2 was the best".into(),
        added_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        completed_at: Some(Utc.with_ymd_and_hms(2026, 3, 20, 18, 0, 0).unwrap()),
        due_at: None,
        version: 4,
    }
}

roundtrip_and_validate!(learning_item_roundtrip, LearningItem, sample_item());

roundtrip_and_validate!(
    queued_item_roundtrip,
    LearningItem,
    LearningItem {
        status: LearningStatus::Todo,
        queued: true,
        completed_at: None,
        due_at: Some(Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap()),
        ..sample_item()
    }
);

roundtrip_and_validate!(
    suggestion_roundtrip,
    BrowseSuggestion,
    default_suggestions().remove(0)
);

roundtrip_and_validate!(
    draft_roundtrip,
    ItemDraft,
    ItemDraft {
        tags: vec!["Focus".into()],
        note: Some("read twice".into()),
        ..ItemDraft::new("Deep Work for Developers", "Medium")
    }
);

roundtrip_and_validate!(
    suggestion_view_roundtrip,
    SuggestionView,
    SuggestionView {
        suggestion: default_suggestions().remove(3),
        already_added: true,
    }
);

roundtrip_and_validate!(
    browse_event_added_roundtrip,
    BrowseEvent,
    BrowseEvent::AddedToLibrary {
        title: "Systems Thinking 101".into(),
        id: 3,
    }
);

roundtrip_and_validate!(
    dashboard_roundtrip,
    Dashboard,
    Dashboard {
        summary: Summary {
            total: 1,
            done: 1,
            in_progress: 0,
        },
        completed: vec![sample_item()],
        ..Dashboard::default()
    }
);

roundtrip_and_validate!(
    item_list_response_roundtrip,
    ItemListResponse,
    ItemListResponse {
        filter: ItemFilter {
            status: Some(LearningStatus::Done),
            tag: Some("systems".into()),
            mode: TagMatch::Exact,
        },
        items: vec![sample_item()],
        total: 1,
    }
);

roundtrip_and_validate!(
    tags_response_roundtrip,
    TagsResponse,
    TagsResponse {
        tags: vec!["Strategy".into(), "Systems".into()],
    }
);

roundtrip_and_validate!(
    delete_response_roundtrip,
    DeleteResponse,
    DeleteResponse { id: 7, deleted: true }
);

#[test]
fn item_without_optional_fields_deserializes() {
    let json = r#"{
        "title": "Rust Atomics",
        "source": "O'Reilly",
        "status": "todo",
        "added_at": "2026-03-01T09:30:00Z",
        "completed_at": null
    }"#;
    let item: LearningItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.id, 0);
    assert!(!item.is_persisted());
    assert_eq!(item.category, LearningCategory::Course);
    assert!(item.tags.is_empty());
    assert!(!item.queued);
}
