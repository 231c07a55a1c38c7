//! Service layer over the item store.
//!
//! `LoreService` wraps `LoreDb` with the retry policy for contended updates,
//! the catalog event channel, and view settings from configuration. The
//! lifecycle, dashboard, library and catalog operations are implemented as
//! `impl LoreService` blocks in `repos/`.

use lore_config::LoreConfig;
use lore_core::catalog::BrowseEvent;
use lore_core::enums::TagMatch;
use lore_core::views::DEFAULT_NEXT_UP_WINDOW;
use tokio::sync::broadcast;

use crate::LoreDb;
use crate::error::DatabaseError;
use crate::retry::RetryConfig;

/// Buffered catalog events per subscriber before the oldest are dropped.
const CATALOG_EVENT_CAPACITY: usize = 32;

pub struct LoreService {
    db: LoreDb,
    retry: RetryConfig,
    catalog_events: broadcast::Sender<BrowseEvent>,
    next_up_window: usize,
    search_mode: TagMatch,
}

impl LoreService {
    /// Open a local database and wrap it with default settings.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(LoreDb::open_local(db_path).await?))
    }

    /// Open the database named by `config` and apply its settings.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the store path cannot be
    /// resolved, or `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &LoreConfig) -> Result<Self, DatabaseError> {
        let path = config
            .store
            .resolved_path()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !config.store.is_in_memory() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DatabaseError::InvalidState(format!("create {}: {e}", parent.display()))
                })?;
            }
        }
        let db = LoreDb::open_local(&path.to_string_lossy()).await?;
        Ok(Self::from_db(db)
            .with_retry(RetryConfig::from_store_config(&config.store))
            .with_next_up_window(config.general.next_up_window as usize)
            .with_search_mode(config.general.search_mode))
    }

    /// Wrap an already opened database.
    #[must_use]
    pub fn from_db(db: LoreDb) -> Self {
        let (catalog_events, _) = broadcast::channel(CATALOG_EVENT_CAPACITY);
        Self {
            db,
            retry: RetryConfig::default(),
            catalog_events,
            next_up_window: DEFAULT_NEXT_UP_WINDOW,
            search_mode: TagMatch::default(),
        }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_next_up_window(mut self, window: usize) -> Self {
        self.next_up_window = window;
        self
    }

    #[must_use]
    pub fn with_search_mode(mut self, mode: TagMatch) -> Self {
        self.search_mode = mode;
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LoreDb {
        &self.db
    }

    #[must_use]
    pub const fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    #[must_use]
    pub const fn next_up_window(&self) -> usize {
        self.next_up_window
    }

    #[must_use]
    pub const fn search_mode(&self) -> TagMatch {
        self.search_mode
    }

    /// Receive every `BrowseEvent` published after this call.
    #[must_use]
    pub fn subscribe_catalog_events(&self) -> broadcast::Receiver<BrowseEvent> {
        self.catalog_events.subscribe()
    }

    pub(crate) fn publish_catalog_event(&self, event: &BrowseEvent) {
        // No subscribers is fine; the event is also returned to the caller.
        let _ = self.catalog_events.send(event.clone());
    }
}
