//! Status, category, and matching enums for Lore.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the text stored in SQL columns. Unlike a forward-only workflow,
//! `LearningStatus` permits every transition; `next()` defines the toggle cycle.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// LearningStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a learning item.
///
/// ```text
/// todo → in_progress → done
///   ↑                    │
///   └────────────────────┘  (toggle wraps; any direct transition is allowed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LearningStatus {
    Todo,
    InProgress,
    Done,
}

impl LearningStatus {
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Next state in the toggle cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for LearningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LearningCategory
// ---------------------------------------------------------------------------

/// Kind of learning resource.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LearningCategory {
    #[default]
    Course,
    Video,
    Book,
    Podcast,
}

impl LearningCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Video => "video",
            Self::Book => "book",
            Self::Podcast => "podcast",
        }
    }
}

impl fmt::Display for LearningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TagMatch
// ---------------------------------------------------------------------------

/// How the library tag/query filter is compared against items.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TagMatch {
    /// Case-insensitive equality against any tag.
    #[default]
    Exact,
    /// Case-insensitive substring of any tag.
    Contains,
    /// Free-text search: case-insensitive substring of any tag, the title or
    /// the source.
    Text,
}

impl TagMatch {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Contains => "contains",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for TagMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(status_todo, LearningStatus, LearningStatus::Todo, "todo");
    test_serde_roundtrip!(
        status_in_progress,
        LearningStatus,
        LearningStatus::InProgress,
        "in_progress"
    );
    test_serde_roundtrip!(status_done, LearningStatus, LearningStatus::Done, "done");

    test_serde_roundtrip!(
        category_podcast,
        LearningCategory,
        LearningCategory::Podcast,
        "podcast"
    );
    test_serde_roundtrip!(tag_match_contains, TagMatch, TagMatch::Contains, "contains");
    test_serde_roundtrip!(tag_match_text, TagMatch, TagMatch::Text, "text");

    // --- Transition tests ---

    #[test]
    fn next_is_a_three_cycle() {
        for status in LearningStatus::ALL {
            assert_eq!(status.next().next().next(), status);
            assert_ne!(status.next(), status);
        }
    }

    #[test]
    fn toggle_order() {
        assert_eq!(LearningStatus::Todo.next(), LearningStatus::InProgress);
        assert_eq!(LearningStatus::InProgress.next(), LearningStatus::Done);
        assert_eq!(LearningStatus::Done.next(), LearningStatus::Todo);
    }

    #[test]
    fn category_defaults_to_course() {
        assert_eq!(LearningCategory::default(), LearningCategory::Course);
    }

    // --- Display / as_str tests ---

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", LearningStatus::InProgress), "in_progress");
        assert_eq!(format!("{}", LearningCategory::Book), "book");
        assert_eq!(format!("{}", TagMatch::Exact), "exact");
    }
}
