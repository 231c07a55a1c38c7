//! # lore-db
//!
//! libSQL item store and service layer for Lore.
//!
//! `LoreDb` owns the connection and a change notifier; the item store contract
//! lives in [`repos::item`]. `LoreService` layers the lifecycle, dashboard,
//! library and catalog operations on top. Live queries in [`live`] re-run
//! whenever the notifier fires.

pub mod error;
pub mod helpers;
pub mod live;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;
mod test_support;
pub mod updates;

use std::sync::atomic::{AtomicI64, Ordering};

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::watch;

/// Central database handle for the item store.
///
/// Every successful write bumps a generation counter on a `watch` channel.
/// Live queries subscribe to it and re-query on change.
pub struct LoreDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    changes: watch::Sender<u64>,
    /// Last `PRAGMA data_version` seen, for spotting commits from other processes.
    data_version: AtomicI64,
}

impl LoreDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let (changes, _) = watch::channel(0);

        let lore_db = Self {
            db,
            conn,
            changes,
            data_version: AtomicI64::new(0),
        };
        lore_db.run_migrations().await?;
        let version = lore_db.data_version().await?;
        lore_db.data_version.store(version, Ordering::Relaxed);
        tracing::debug!(path, "opened item store");
        Ok(lore_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Subscribe to the change notifier. The returned receiver has already
    /// seen the current generation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Current write generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        *self.changes.borrow()
    }

    /// Signal every live query that the store changed.
    pub(crate) fn notify_changed(&self) {
        self.changes.send_modify(|generation| *generation += 1);
    }

    /// Fire the change notifier if another connection (usually another
    /// process) committed since the last check. Writes made through this
    /// handle notify on their own and are not reported here.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the pragma cannot be read.
    pub async fn detect_external_changes(&self) -> Result<bool, DatabaseError> {
        let current = self.data_version().await?;
        let previous = self.data_version.swap(current, Ordering::Relaxed);
        if previous == current {
            return Ok(false);
        }
        tracing::debug!(previous, current, "external write detected");
        self.notify_changed();
        Ok(true)
    }

    async fn data_version(&self) -> Result<i64, DatabaseError> {
        let mut rows = self.conn.query("PRAGMA data_version", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> LoreDb {
        LoreDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["learning_items"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn notify_bumps_generation() {
        let db = test_db().await;
        let mut rx = db.subscribe();
        assert_eq!(db.generation(), 0);

        db.notify_changed();
        db.notify_changed();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 2);
        assert_eq!(db.generation(), 2);
    }

    #[tokio::test]
    async fn blank_title_is_rejected_by_schema() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO learning_items (title, source, added_at) VALUES ('  ', 'src', '2026-01-01T00:00:00.000Z')",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn external_commit_fires_notifier() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.db");
        let path = path.to_str().unwrap();
        let watcher = LoreDb::open_local(path).await.unwrap();
        let writer = LoreDb::open_local(path).await.unwrap();

        assert!(!watcher.detect_external_changes().await.unwrap());

        writer
            .conn()
            .execute(
                "INSERT INTO learning_items (title, source, added_at) VALUES ('Rust', 'Book', '2026-01-01T00:00:00.000Z')",
                (),
            )
            .await
            .unwrap();

        assert!(watcher.detect_external_changes().await.unwrap());
        assert_eq!(watcher.generation(), 1);
        assert!(!watcher.detect_external_changes().await.unwrap());
    }

    #[tokio::test]
    async fn file_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.db");
        let path = path.to_str().unwrap();

        {
            let db = LoreDb::open_local(path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO learning_items (title, source, added_at) VALUES ('Rust', 'Book', '2026-01-01T00:00:00.000Z')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = LoreDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM learning_items", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
