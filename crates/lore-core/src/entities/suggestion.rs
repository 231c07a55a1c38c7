use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LearningCategory;

/// A catalog entry offered for import into the library.
///
/// Suggestions are never stored; they are matched against the library by `url`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BrowseSuggestion {
    pub title: String,
    pub source: String,
    pub url: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: LearningCategory,
    /// Human-readable length, e.g. `"15 min read"`.
    pub duration: Option<String>,
}
