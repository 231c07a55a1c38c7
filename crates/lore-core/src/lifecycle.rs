//! Lifecycle rules for learning items.
//!
//! Pure functions that mutate an in-memory `LearningItem`; persistence lives in
//! `lore-db`. Every function keeps two invariants:
//!
//! - `completed_at.is_some()` exactly when `status == Done`
//! - `queued` implies `status == Todo`
//!
//! `now` is passed in so callers (and tests) control the clock.

use chrono::{DateTime, Utc};

use crate::entities::{ItemDraft, LearningItem};
use crate::enums::LearningStatus;
use crate::errors::CoreError;

/// Set `status`, stamping or clearing `completed_at` to match.
///
/// Any status other than `todo` also clears `queued`.
pub fn set_status(item: &mut LearningItem, status: LearningStatus, now: DateTime<Utc>) {
    item.status = status;
    item.completed_at = match status {
        LearningStatus::Done => Some(now),
        LearningStatus::Todo | LearningStatus::InProgress => None,
    };
    if status != LearningStatus::Todo {
        item.queued = false;
    }
}

/// Advance along the `todo → in_progress → done → todo` cycle.
pub fn toggle_status(item: &mut LearningItem, now: DateTime<Utc>) {
    set_status(item, item.status.next(), now);
}

pub fn start_item(item: &mut LearningItem, now: DateTime<Utc>) {
    set_status(item, LearningStatus::InProgress, now);
}

pub fn complete_item(item: &mut LearningItem, now: DateTime<Utc>) {
    set_status(item, LearningStatus::Done, now);
}

/// Reset to `todo` and stage the item in the queue.
pub fn move_to_queue(item: &mut LearningItem) {
    item.status = LearningStatus::Todo;
    item.queued = true;
    item.completed_at = None;
}

/// Alias of [`move_to_queue`] used by the dashboard's "add to queue" action.
pub fn add_to_queue(item: &mut LearningItem) {
    move_to_queue(item);
}

/// Drop the queued flag without touching the status.
pub fn remove_from_queue(item: &mut LearningItem) {
    item.queued = false;
}

pub fn update_note(item: &mut LearningItem, note: impl Into<String>) {
    item.note = note.into();
}

/// Trim each tag and drop the empty ones, keeping order.
#[must_use]
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Split comma-separated edit input into tags.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

/// Build a new, unsaved item (`id == 0`) from an edit-form draft, stamped
/// with `now`. A draft created as done is completed at `now`.
///
/// Existing items are edited through partial updates instead, which route
/// status changes through [`set_status`].
///
/// # Errors
///
/// Returns `CoreError::Validation` if the draft has a blank title or source.
pub fn new_item(draft: ItemDraft, now: DateTime<Utc>) -> Result<LearningItem, CoreError> {
    draft.validate()?;

    let ItemDraft {
        title,
        source,
        url,
        category,
        tags,
        status,
        due_at,
        note,
    } = draft;

    Ok(LearningItem {
        id: 0,
        title: title.trim().to_string(),
        url: url.trim().to_string(),
        source: source.trim().to_string(),
        category,
        tags: normalize_tags(tags),
        status,
        queued: false,
        note: note.unwrap_or_default(),
        added_at: now,
        completed_at: (status == LearningStatus::Done).then_some(now),
        due_at,
        version: 0,
    })
}
