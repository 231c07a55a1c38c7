//! Live queries over the item store.
//!
//! A live query borrows the `LoreDb`, holds a receiver on its change notifier,
//! and yields a fresh snapshot from [`next`](LiveItems::next): immediately on
//! the first call, then once per observed change. Several writes between two
//! calls coalesce into one snapshot. Dropping the query unsubscribes it.
//!
//! `next` is cancel-safe: a change observed by a `next` future that is
//! dropped before its snapshot was read is delivered by the following call.

use std::sync::Arc;

use tokio::sync::watch;

use lore_core::entities::LearningItem;
use lore_core::enums::{LearningStatus, TagMatch};
use lore_core::views::{self, Dashboard, ItemFilter};

use crate::LoreDb;
use crate::error::DatabaseError;
use crate::service::LoreService;

fn closed() -> DatabaseError {
    DatabaseError::InvalidState("change notifier closed".into())
}

/// Wait-for-change bookkeeping shared by every live query.
struct ChangeFeed {
    rx: watch::Receiver<u64>,
    primed: bool,
    /// A change was consumed but its snapshot not yet delivered.
    pending: bool,
}

impl ChangeFeed {
    fn new(db: &LoreDb) -> Self {
        Self {
            rx: db.subscribe(),
            primed: false,
            pending: false,
        }
    }

    /// Return at once on the first call or while a snapshot is owed,
    /// otherwise wait for the next write.
    async fn tick(&mut self) -> Result<(), DatabaseError> {
        if self.primed && !self.pending {
            self.rx.changed().await.map_err(|_| closed())?;
        }
        self.primed = true;
        self.pending = true;
        self.rx.borrow_and_update();
        Ok(())
    }

    const fn settle(&mut self) {
        self.pending = false;
    }
}

#[derive(Debug, Clone, Copy)]
enum ItemScope {
    All,
    Status(LearningStatus),
}

/// Live item list: the whole library (newest first) or one status (oldest first).
pub struct LiveItems<'a> {
    db: &'a LoreDb,
    scope: ItemScope,
    feed: ChangeFeed,
}

impl LiveItems<'_> {
    pub async fn next(&mut self) -> Result<Vec<LearningItem>, DatabaseError> {
        self.feed.tick().await?;
        let items = self.fetch().await?;
        self.feed.settle();
        Ok(items)
    }

    async fn fetch(&self) -> Result<Vec<LearningItem>, DatabaseError> {
        match self.scope {
            ItemScope::All => self.db.list_items().await,
            ItemScope::Status(status) => self.db.list_items_by_status(status).await,
        }
    }
}

/// Live row count, optionally restricted to one status.
pub struct LiveCount<'a> {
    db: &'a LoreDb,
    status: Option<LearningStatus>,
    feed: ChangeFeed,
}

impl LiveCount<'_> {
    pub async fn next(&mut self) -> Result<u64, DatabaseError> {
        self.feed.tick().await?;
        let count = match self.status {
            None => self.db.count_items().await?,
            Some(status) => self.db.count_items_by_status(status).await?,
        };
        self.feed.settle();
        Ok(count)
    }
}

/// Live dashboard, recomputed from the full library on every change.
pub struct LiveDashboard<'a> {
    items: LiveItems<'a>,
    window: usize,
}

impl LiveDashboard<'_> {
    pub async fn next(&mut self) -> Result<Dashboard, DatabaseError> {
        let items = self.items.next().await?;
        Ok(views::dashboard(&items, self.window))
    }
}

/// Handle for changing a [`LibraryView`]'s selections from elsewhere.
#[derive(Clone)]
pub struct LibrarySelection {
    status: Arc<watch::Sender<Option<LearningStatus>>>,
    query: Arc<watch::Sender<String>>,
}

impl LibrarySelection {
    fn new() -> Self {
        Self {
            status: Arc::new(watch::channel(None).0),
            query: Arc::new(watch::channel(String::new()).0),
        }
    }

    pub fn set_status(&self, status: Option<LearningStatus>) {
        self.status.send_replace(status);
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.query.send_replace(query.into());
    }
}

/// Library projection combining the live item list with a status selection
/// and a tag/query selection. A change to any of the three yields a new
/// filtered snapshot.
pub struct LibraryView<'a> {
    items: LiveItems<'a>,
    mode: TagMatch,
    selection: LibrarySelection,
    status_rx: watch::Receiver<Option<LearningStatus>>,
    query_rx: watch::Receiver<String>,
    snapshot: Option<Vec<LearningItem>>,
}

impl LibraryView<'_> {
    /// A handle that can update this view's selections.
    #[must_use]
    pub fn selection(&self) -> LibrarySelection {
        self.selection.clone()
    }

    pub async fn next(&mut self) -> Result<Vec<LearningItem>, DatabaseError> {
        if self.snapshot.is_none() || self.items.feed.pending {
            self.snapshot = Some(self.items.next().await?);
        } else {
            tokio::select! {
                changed = self.items.feed.rx.changed() => {
                    changed.map_err(|_| closed())?;
                    self.items.feed.pending = true;
                    self.snapshot = Some(self.items.next().await?);
                }
                changed = self.status_rx.changed() => changed.map_err(|_| closed())?,
                changed = self.query_rx.changed() => changed.map_err(|_| closed())?,
            }
        }

        let filter = ItemFilter {
            status: *self.status_rx.borrow_and_update(),
            tag: Some(self.query_rx.borrow_and_update().clone()),
            mode: self.mode,
        };
        Ok(self
            .snapshot
            .as_deref()
            .map(|items| views::filter_items(items, &filter))
            .unwrap_or_default())
    }
}

impl LoreDb {
    #[must_use]
    pub fn observe_all(&self) -> LiveItems<'_> {
        LiveItems {
            db: self,
            scope: ItemScope::All,
            feed: ChangeFeed::new(self),
        }
    }

    #[must_use]
    pub fn observe_by_status(&self, status: LearningStatus) -> LiveItems<'_> {
        LiveItems {
            db: self,
            scope: ItemScope::Status(status),
            feed: ChangeFeed::new(self),
        }
    }

    #[must_use]
    pub fn observe_count(&self) -> LiveCount<'_> {
        LiveCount {
            db: self,
            status: None,
            feed: ChangeFeed::new(self),
        }
    }

    #[must_use]
    pub fn observe_count_by_status(&self, status: LearningStatus) -> LiveCount<'_> {
        LiveCount {
            db: self,
            status: Some(status),
            feed: ChangeFeed::new(self),
        }
    }
}

impl LoreService {
    #[must_use]
    pub fn observe_dashboard(&self) -> LiveDashboard<'_> {
        LiveDashboard {
            items: self.db().observe_all(),
            window: self.next_up_window(),
        }
    }

    /// A live library projection starting with no status and an empty query.
    #[must_use]
    pub fn library_view(&self) -> LibraryView<'_> {
        let selection = LibrarySelection::new();
        LibraryView {
            items: self.db().observe_all(),
            mode: self.search_mode(),
            status_rx: selection.status.subscribe(),
            query_rx: selection.query.subscribe(),
            selection,
            snapshot: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{add_item, test_service};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn ids(items: &[LearningItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[tokio::test]
    async fn first_next_yields_current_snapshot() {
        let svc = test_service().await;
        let a = add_item(&svc, "A", &[]).await;
        let mut live = svc.db().observe_all();
        assert_eq!(ids(&live.next().await.unwrap()), vec![a.id]);
    }

    #[tokio::test]
    async fn writes_coalesce_into_latest_snapshot() {
        let svc = test_service().await;
        let mut live = svc.db().observe_all();
        assert!(live.next().await.unwrap().is_empty());

        add_item(&svc, "A", &[]).await;
        add_item(&svc, "B", &[]).await;
        add_item(&svc, "C", &[]).await;

        assert_eq!(live.next().await.unwrap().len(), 3);
        let pending = tokio::time::timeout(Duration::from_millis(20), live.next()).await;
        assert!(pending.is_err(), "no further snapshot without a new write");
    }

    #[tokio::test]
    async fn change_consumed_by_a_dropped_next_is_redelivered() {
        let svc = test_service().await;
        let mut live = svc.db().observe_all();
        assert!(live.next().await.unwrap().is_empty());

        add_item(&svc, "A", &[]).await;
        // what a `next` cancelled between waking and fetching leaves behind
        live.feed.tick().await.unwrap();

        let snapshot = tokio::time::timeout(Duration::from_millis(50), live.next())
            .await
            .expect("owed snapshot is delivered without another write")
            .unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[tokio::test]
    async fn counts_follow_status_changes() {
        let svc = test_service().await;
        let item = add_item(&svc, "A", &[]).await;
        let mut done = svc.db().observe_count_by_status(LearningStatus::Done);
        let mut all = svc.db().observe_count();
        assert_eq!(done.next().await.unwrap(), 0);
        assert_eq!(all.next().await.unwrap(), 1);

        svc.complete_item(item.id).await.unwrap();
        assert_eq!(done.next().await.unwrap(), 1);
        assert_eq!(all.next().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn status_view_tracks_membership() {
        let svc = test_service().await;
        let item = add_item(&svc, "A", &[]).await;
        let mut doing = svc.db().observe_by_status(LearningStatus::InProgress);
        assert!(doing.next().await.unwrap().is_empty());

        svc.start_item(item.id).await.unwrap();
        assert_eq!(ids(&doing.next().await.unwrap()), vec![item.id]);
    }

    #[tokio::test]
    async fn live_dashboard_recomputes() {
        let svc = test_service().await;
        let mut dash = svc.observe_dashboard();
        assert_eq!(dash.next().await.unwrap().summary.total, 0);

        let item = add_item(&svc, "A", &[]).await;
        svc.start_item(item.id).await.unwrap();
        let snapshot = dash.next().await.unwrap();
        assert_eq!(snapshot.summary.in_progress, 1);
        assert_eq!(ids(&snapshot.current), vec![item.id]);
    }

    #[tokio::test]
    async fn library_view_reacts_to_every_input() {
        let svc = test_service().await;
        let kotlin = add_item(&svc, "Kotlin", &["Kotlin"]).await;
        let rust = add_item(&svc, "Rust", &["Rust"]).await;

        let mut view = svc.library_view();
        let selection = view.selection();
        assert_eq!(ids(&view.next().await.unwrap()), vec![rust.id, kotlin.id]);

        selection.set_query("kotlin");
        assert_eq!(ids(&view.next().await.unwrap()), vec![kotlin.id]);

        selection.set_status(Some(LearningStatus::Done));
        assert!(view.next().await.unwrap().is_empty());

        svc.complete_item(kotlin.id).await.unwrap();
        assert_eq!(ids(&view.next().await.unwrap()), vec![kotlin.id]);

        selection.set_query("");
        selection.set_status(None);
        assert_eq!(view.next().await.unwrap().len(), 2);
    }
}
