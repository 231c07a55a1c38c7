//! Derived views over a snapshot of the library.
//!
//! Everything here is a pure function of `&[LearningItem]`. Nothing is cached
//! or maintained incrementally: a change to the store means the caller takes
//! a fresh snapshot and recomputes.

use std::cmp::Reverse;
use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::LearningItem;
use crate::enums::{LearningStatus, TagMatch};

/// Default size of the "next up" window.
pub const DEFAULT_NEXT_UP_WINDOW: usize = 10;

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Summary {
    pub total: u64,
    pub done: u64,
    pub in_progress: u64,
}

/// Everything the dashboard shows, computed from one snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Dashboard {
    pub summary: Summary,
    pub current: Vec<LearningItem>,
    pub queued: Vec<LearningItem>,
    pub completed: Vec<LearningItem>,
    pub next_up: Vec<LearningItem>,
}

/// Library filter selection. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemFilter {
    pub status: Option<LearningStatus>,
    pub tag: Option<String>,
    #[serde(default)]
    pub mode: TagMatch,
}

impl ItemFilter {
    #[must_use]
    pub fn matches(&self, item: &LearningItem) -> bool {
        if self.status.is_some_and(|s| s != item.status) {
            return false;
        }
        let Some(query) = self.tag.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
            return true;
        };
        let needle = query.to_lowercase();
        let contains = |field: &String| field.to_lowercase().contains(&needle);
        match self.mode {
            TagMatch::Exact => item.has_tag(query),
            TagMatch::Contains => item.tags.iter().any(contains),
            TagMatch::Text => item
                .tags
                .iter()
                .chain([&item.title, &item.source])
                .any(contains),
        }
    }
}

#[must_use]
pub fn summary(items: &[LearningItem]) -> Summary {
    let count = |status| items.iter().filter(|i| i.status == status).count() as u64;
    Summary {
        total: items.len() as u64,
        done: count(LearningStatus::Done),
        in_progress: count(LearningStatus::InProgress),
    }
}

/// In-progress items, oldest first.
#[must_use]
pub fn current_tasks(items: &[LearningItem]) -> Vec<LearningItem> {
    let mut current: Vec<_> = items
        .iter()
        .filter(|i| i.status == LearningStatus::InProgress)
        .cloned()
        .collect();
    current.sort_by_key(|i| (i.added_at, i.id));
    current
}

/// Queued todo items in input order.
#[must_use]
pub fn queued_items(items: &[LearningItem]) -> Vec<LearningItem> {
    items
        .iter()
        .filter(|i| i.queued && i.status == LearningStatus::Todo)
        .cloned()
        .collect()
}

/// Done items, most recently completed first.
#[must_use]
pub fn completed_items(items: &[LearningItem]) -> Vec<LearningItem> {
    let mut done: Vec<_> = items
        .iter()
        .filter(|i| i.status == LearningStatus::Done)
        .cloned()
        .collect();
    done.sort_by_key(|i| Reverse(i.completion_sort_key()));
    done
}

/// Unfinished items: dated ones first by due date, then undated, newest id
/// breaking ties. At most `window` items.
#[must_use]
pub fn next_up(items: &[LearningItem], window: usize) -> Vec<LearningItem> {
    let mut pending: Vec<_> = items
        .iter()
        .filter(|i| i.status != LearningStatus::Done)
        .cloned()
        .collect();
    pending.sort_by_key(|i| (i.due_at.is_none(), i.due_at, Reverse(i.id)));
    pending.truncate(window);
    pending
}

#[must_use]
pub fn dashboard(items: &[LearningItem], next_up_window: usize) -> Dashboard {
    Dashboard {
        summary: summary(items),
        current: current_tasks(items),
        queued: queued_items(items),
        completed: completed_items(items),
        next_up: next_up(items, next_up_window),
    }
}

/// Items matching `filter`, preserving input order.
#[must_use]
pub fn filter_items(items: &[LearningItem], filter: &ItemFilter) -> Vec<LearningItem> {
    items.iter().filter(|i| filter.matches(i)).cloned().collect()
}

/// Tag vocabulary: trimmed, non-empty, deduplicated ignoring case (first
/// spelling seen wins), sorted ignoring case.
#[must_use]
pub fn distinct_tags(items: &[LearningItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags: Vec<String> = items
        .iter()
        .flat_map(|i| i.tags.iter())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty() && seen.insert(t.to_lowercase()))
        .map(str::to_string)
        .collect();
    tags.sort_by_cached_key(|t| t.to_lowercase());
    tags
}
