//! The built-in catalog of suggested learning resources.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{BrowseSuggestion, LearningItem};
use crate::enums::{LearningCategory, LearningStatus};

/// A suggestion annotated with whether the library already holds its url.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionView {
    pub suggestion: BrowseSuggestion,
    pub already_added: bool,
}

/// Outcome of importing a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BrowseEvent {
    AddedToLibrary { title: String, id: i64 },
    AlreadyInLibrary { title: String },
}

impl BrowseEvent {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::AddedToLibrary { title, .. } | Self::AlreadyInLibrary { title } => title,
        }
    }
}

fn suggestion(
    title: &str,
    source: &str,
    url: &str,
    description: &str,
    tags: &[&str],
    category: LearningCategory,
    duration: &str,
) -> BrowseSuggestion {
    BrowseSuggestion {
        title: title.to_string(),
        source: source.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        category,
        duration: Some(duration.to_string()),
    }
}

/// The fixed catalog, in display order.
#[must_use]
pub fn default_suggestions() -> Vec<BrowseSuggestion> {
    vec![
        suggestion(
            "Designing Your Learning Roadmap",
            "FutureLearn",
            "https://www.futurelearn.com/info/blog/design-a-learning-plan",
            "Create a long-term learning strategy with checkpoints and reflection prompts.",
            &["Planning", "Self-Improvement"],
            LearningCategory::Book,
            "15 min read",
        ),
        suggestion(
            "Building a Kotlin Coroutines Mental Model",
            "Kotlinlang",
            "https://kotlinlang.org/docs/coroutines-guide.html",
            "Understand structured concurrency, scopes, and flows in modern Kotlin.",
            &["Kotlin", "Concurrency"],
            LearningCategory::Course,
            "2 hr course",
        ),
        suggestion(
            "Deep Work for Developers",
            "Medium",
            "https://medium.com/swlh/deep-work-for-developers-4aefb1b72a6",
            "Tactics to reclaim focus time and ship meaningful projects.",
            &["Productivity", "Mindset"],
            LearningCategory::Book,
            "10 min read",
        ),
        suggestion(
            "Product Analytics Crash Course",
            "Amplitude",
            "https://academy.amplitude.com/path/product-analytics-crash-course",
            "Learn funnels, cohorts, and retention with practical product metrics exercises.",
            &["Analytics", "Product"],
            LearningCategory::Course,
            "1.5 hr course",
        ),
        suggestion(
            "Navigate the Research Rabbit Hole",
            "Ness Labs",
            "https://nesslabs.com/research-rabbit-hole",
            "A framework for exploring new topics without losing momentum.",
            &["Research", "Frameworks"],
            LearningCategory::Book,
            "8 min read",
        ),
        suggestion(
            "Systems Thinking 101",
            "Coursera",
            "https://www.coursera.org/learn/systems-thinking",
            "Recognize feedback loops, leverage points, and map complex systems.",
            &["Systems", "Strategy"],
            LearningCategory::Course,
            "4 week course",
        ),
    ]
}

/// Look up a catalog entry by url.
#[must_use]
pub fn find_suggestion(url: &str) -> Option<BrowseSuggestion> {
    default_suggestions().into_iter().find(|s| s.url == url)
}

/// Mark each suggestion whose url already appears in `library`.
#[must_use]
pub fn annotate(suggestions: Vec<BrowseSuggestion>, library: &[LearningItem]) -> Vec<SuggestionView> {
    let urls: HashSet<&str> = library.iter().map(|i| i.url.as_str()).collect();
    suggestions
        .into_iter()
        .map(|suggestion| SuggestionView {
            already_added: urls.contains(suggestion.url.as_str()),
            suggestion,
        })
        .collect()
}

/// The unsaved library item created when importing `suggestion`.
#[must_use]
pub fn to_item(suggestion: &BrowseSuggestion, now: DateTime<Utc>) -> LearningItem {
    LearningItem {
        id: 0,
        title: suggestion.title.clone(),
        url: suggestion.url.clone(),
        source: suggestion.source.clone(),
        category: suggestion.category,
        tags: suggestion.tags.clone(),
        status: LearningStatus::Todo,
        queued: false,
        note: String::new(),
        added_at: now,
        completed_at: None,
        due_at: None,
        version: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn catalog_urls_are_unique() {
        let suggestions = default_suggestions();
        let urls: HashSet<_> = suggestions.iter().map(|s| s.url.clone()).collect();
        assert_eq!(urls.len(), suggestions.len());
        assert_eq!(suggestions.len(), 6);
    }

    #[test]
    fn annotate_marks_existing_urls() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let suggestions = default_suggestions();
        let mut imported = to_item(&suggestions[1], now);
        imported.id = 1;

        let views = annotate(suggestions, &[imported]);
        let added: Vec<bool> = views.iter().map(|v| v.already_added).collect();
        assert_eq!(added, vec![false, true, false, false, false, false]);
    }

    #[test]
    fn to_item_copies_suggestion_fields() {
        let now = Utc.timestamp_millis_opt(42).unwrap();
        let s = &default_suggestions()[5];
        let item = to_item(s, now);
        assert_eq!(item.title, "Systems Thinking 101");
        assert_eq!(item.url, s.url);
        assert_eq!(item.source, "Coursera");
        assert_eq!(item.tags, s.tags);
        assert_eq!(item.status, LearningStatus::Todo);
        assert_eq!(item.note, "");
        assert_eq!(item.added_at, now);
        assert_eq!(item.completed_at, None);
    }

    #[test]
    fn find_suggestion_by_url() {
        assert!(find_suggestion("https://nesslabs.com/research-rabbit-hole").is_some());
        assert!(find_suggestion("https://example.com").is_none());
    }

    #[test]
    fn browse_event_serializes_with_tag() {
        let ev = BrowseEvent::AlreadyInLibrary {
            title: "Deep Work".into(),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["event"], "already_in_library");
        assert_eq!(ev.title(), "Deep Work");
    }
}
