// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Handles creation, lookup and cascading deletion of tags

use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{Tag, TagCreateInput};
use rtag_storage::{StorageError, StorageResult};

pub struct TagStorage {
    pool: SqlitePool,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a single tag by ID
    pub async fn get_tag(&self, tag_id: i64) -> StorageResult<Tag> {
        debug!("Fetching tag: {}", tag_id);

        let row = sqlx::query("SELECT id, name FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => self.row_to_tag(&r),
            None => Err(StorageError::not_found("Tag")),
        }
    }

    /// Create a new tag. Names are not unique.
    pub async fn create_tag(&self, input: TagCreateInput) -> StorageResult<Tag> {
        debug!("Creating tag (name: {})", input.name);

        let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
            .bind(&input.name)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        self.get_tag(result.last_insert_rowid()).await
    }

    /// Delete a tag together with every review association pointing at it.
    ///
    /// Returns the tag as it was before deletion.
    pub async fn delete_tag(&self, tag_id: i64) -> StorageResult<Tag> {
        debug!("Deleting tag: {}", tag_id);

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        let row = sqlx::query("SELECT id, name FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        let tag = match row {
            Some(r) => self.row_to_tag(&r)?,
            None => return Err(StorageError::not_found("Tag")),
        };

        let removed = sqlx::query("DELETE FROM review_tags WHERE tag_id = ?")
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?
            .rows_affected();

        sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        // Both deletes land together or not at all
        tx.commit().await.map_err(StorageError::Sqlx)?;

        debug!(
            "Deleted tag {} and {} review association(s)",
            tag_id, removed
        );

        Ok(tag)
    }

    /// Convert a database row to a Tag
    fn row_to_tag(&self, row: &sqlx::sqlite::SqliteRow) -> StorageResult<Tag> {
        Ok(Tag {
            id: row.try_get("id").map_err(StorageError::Sqlx)?,
            name: row.try_get("name").map_err(StorageError::Sqlx)?,
        })
    }
}
