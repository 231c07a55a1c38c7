//! Item store: single-row writes, point lookups, listings and counts over
//! `learning_items`. Every successful write notifies live queries.

use lore_core::entities::LearningItem;
use lore_core::enums::LearningStatus;
use lore_core::views::Summary;

use crate::LoreDb;
use crate::error::DatabaseError;
use crate::helpers::{
    encode_tags, format_datetime, get_count, get_opt_string, parse_datetime, parse_enum,
    parse_optional_datetime, parse_tags,
};

const SELECT_COLS: &str = "id, title, url, source, category, tags, status, queued, note, \
     added_at, completed_at, due_at, version";

const INSERT_COLS: &str = "title, url, source, category, tags, status, queued, note, \
     added_at, completed_at, due_at, version";

fn row_to_item(row: &libsql::Row) -> Result<LearningItem, DatabaseError> {
    Ok(LearningItem {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        source: row.get(3)?,
        category: parse_enum(&row.get::<String>(4)?)?,
        tags: parse_tags(&row.get::<String>(5)?)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        queued: row.get::<i64>(7)? != 0,
        note: row.get(8)?,
        added_at: parse_datetime(&row.get::<String>(9)?)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 10)?.as_deref())?,
        due_at: parse_optional_datetime(get_opt_string(row, 11)?.as_deref())?,
        version: row.get(12)?,
    })
}

async fn collect_items(mut rows: libsql::Rows) -> Result<Vec<LearningItem>, DatabaseError> {
    let mut items = Vec::new();
    while let Some(row) = rows.next().await? {
        items.push(row_to_item(&row)?);
    }
    Ok(items)
}

impl LoreDb {
    /// Insert `item` and return the assigned id. The id on `item` is ignored.
    pub async fn insert_item(&self, item: &LearningItem) -> Result<i64, DatabaseError> {
        let sql = format!(
            "INSERT INTO learning_items ({INSERT_COLS}) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, 1) RETURNING id"
        );
        self.insert_returning(&sql, item)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Insert `item` unless a row with the same url already exists, in one
    /// statement. Returns the new id, or `None` if the url was taken.
    pub async fn insert_item_if_url_absent(
        &self,
        item: &LearningItem,
    ) -> Result<Option<i64>, DatabaseError> {
        let sql = format!(
            "INSERT INTO learning_items ({INSERT_COLS}) \
             SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, 1 \
             WHERE NOT EXISTS (SELECT 1 FROM learning_items WHERE url = ?2) RETURNING id"
        );
        self.insert_returning(&sql, item).await
    }

    async fn insert_returning(
        &self,
        sql: &str,
        item: &LearningItem,
    ) -> Result<Option<i64>, DatabaseError> {
        let params: Vec<libsql::Value> = vec![
            item.title.clone().into(),
            item.url.clone().into(),
            item.source.clone().into(),
            item.category.as_str().into(),
            encode_tags(&item.tags)?.into(),
            item.status.as_str().into(),
            i64::from(item.queued).into(),
            item.note.clone().into(),
            format_datetime(&item.added_at).into(),
            item.completed_at
                .as_ref()
                .map_or(libsql::Value::Null, |dt| format_datetime(dt).into()),
            item.due_at
                .as_ref()
                .map_or(libsql::Value::Null, |dt| format_datetime(dt).into()),
        ];
        let mut rows = self
            .conn()
            .query(sql, libsql::params_from_iter(params))
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let id: i64 = row.get(0)?;
        drop(rows);
        self.notify_changed();
        Ok(Some(id))
    }

    /// Replace every mutable column of the row with `item.id`.
    ///
    /// `added_at` is never written. Returns `false` if no such row exists.
    pub async fn update_item(&self, item: &LearningItem) -> Result<bool, DatabaseError> {
        self.write_item(item, None).await
    }

    /// Like [`Self::update_item`], but only if the stored row still has
    /// `expected_version`. Returns `false` when the row is missing or newer.
    pub async fn update_item_if_version(
        &self,
        item: &LearningItem,
        expected_version: i64,
    ) -> Result<bool, DatabaseError> {
        self.write_item(item, Some(expected_version)).await
    }

    async fn write_item(
        &self,
        item: &LearningItem,
        expected_version: Option<i64>,
    ) -> Result<bool, DatabaseError> {
        let mut sql = String::from(
            "UPDATE learning_items SET title = ?1, url = ?2, source = ?3, category = ?4, \
             tags = ?5, status = ?6, queued = ?7, note = ?8, completed_at = ?9, due_at = ?10, \
             version = version + 1 WHERE id = ?11",
        );
        let mut params: Vec<libsql::Value> = vec![
            item.title.clone().into(),
            item.url.clone().into(),
            item.source.clone().into(),
            item.category.as_str().into(),
            encode_tags(&item.tags)?.into(),
            item.status.as_str().into(),
            i64::from(item.queued).into(),
            item.note.clone().into(),
            item.completed_at
                .as_ref()
                .map_or(libsql::Value::Null, |dt| format_datetime(dt).into()),
            item.due_at
                .as_ref()
                .map_or(libsql::Value::Null, |dt| format_datetime(dt).into()),
            item.id.into(),
        ];
        if let Some(version) = expected_version {
            sql.push_str(" AND version = ?12");
            params.push(version.into());
        }

        let changed = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed > 0 {
            self.notify_changed();
        }
        Ok(changed > 0)
    }

    /// Delete by id. Returns whether a row was removed; a missing id is not an error.
    pub async fn delete_item(&self, id: i64) -> Result<bool, DatabaseError> {
        let changed = self
            .conn()
            .execute("DELETE FROM learning_items WHERE id = ?1", [id])
            .await?;
        if changed > 0 {
            self.notify_changed();
        }
        Ok(changed > 0)
    }

    pub async fn find_item(&self, id: i64) -> Result<Option<LearningItem>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM learning_items WHERE id = ?1"),
                [id],
            )
            .await?;
        rows.next().await?.as_ref().map(row_to_item).transpose()
    }

    /// All items, newest first.
    pub async fn list_items(&self) -> Result<Vec<LearningItem>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM learning_items ORDER BY added_at DESC, id DESC"
                ),
                (),
            )
            .await?;
        collect_items(rows).await
    }

    /// Items with `status`, oldest first.
    pub async fn list_items_by_status(
        &self,
        status: LearningStatus,
    ) -> Result<Vec<LearningItem>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM learning_items WHERE status = ?1 \
                     ORDER BY added_at ASC, id ASC"
                ),
                [status.as_str()],
            )
            .await?;
        collect_items(rows).await
    }

    pub async fn count_items(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM learning_items", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_count(&row, 0)
    }

    pub async fn count_items_by_status(&self, status: LearningStatus) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM learning_items WHERE status = ?1",
                [status.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_count(&row, 0)
    }

    /// Total, done and in-progress counts read in one statement, so the
    /// three numbers always describe the same snapshot.
    pub async fn count_summary(&self) -> Result<Summary, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT COUNT(*), \
                 COUNT(CASE WHEN status = ?1 THEN 1 END), \
                 COUNT(CASE WHEN status = ?2 THEN 1 END) \
                 FROM learning_items",
                [
                    LearningStatus::Done.as_str(),
                    LearningStatus::InProgress.as_str(),
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(Summary {
            total: get_count(&row, 0)?,
            done: get_count(&row, 1)?,
            in_progress: get_count(&row, 2)?,
        })
    }

    pub async fn exists_by_url(&self, url: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT EXISTS(SELECT 1 FROM learning_items WHERE url = ?1)",
                [url],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)? != 0)
    }
}
