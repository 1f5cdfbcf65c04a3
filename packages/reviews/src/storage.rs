// ABOUTME: Review storage layer using SQLite
// ABOUTME: Handles review creation, tag attachment and filtered listing

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use super::types::{Review, ReviewCreateInput, ReviewFilter, ReviewTag};
use rtag_storage::{StorageError, StorageResult};

pub struct ReviewStorage {
    pool: SqlitePool,
}

impl ReviewStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a single review by ID
    pub async fn get_review(&self, review_id: i64) -> StorageResult<Review> {
        debug!("Fetching review: {}", review_id);

        sqlx::query_as::<_, Review>("SELECT id, text, is_tagged FROM reviews WHERE id = ?")
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or_else(|| StorageError::not_found("Review"))
    }

    /// Create a new review
    pub async fn create_review(&self, input: ReviewCreateInput) -> StorageResult<Review> {
        debug!(
            "Creating review ({} chars, is_tagged: {})",
            input.text.chars().count(),
            input.is_tagged
        );

        let result = sqlx::query("INSERT INTO reviews (text, is_tagged) VALUES (?, ?)")
            .bind(&input.text)
            .bind(input.is_tagged)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        self.get_review(result.last_insert_rowid()).await
    }

    /// Attach tags to a review.
    ///
    /// Ids that do not resolve to a tag are skipped. Every resolved id gets a
    /// new association row, so repeated ids and repeated calls add duplicates.
    /// All inserts for one call share a transaction.
    pub async fn attach_tags(&self, review_id: i64, tag_ids: &[i64]) -> StorageResult<Review> {
        debug!("Attaching {} tag id(s) to review {}", tag_ids.len(), review_id);

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        let review = sqlx::query_as::<_, Review>(
            "SELECT id, text, is_tagged FROM reviews WHERE id = ?",
        )
        .bind(review_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(StorageError::Sqlx)?
        .ok_or_else(|| StorageError::not_found("Review"))?;

        let mut attached = 0usize;
        for &tag_id in tag_ids {
            let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM tags WHERE id = ?")
                .bind(tag_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::Sqlx)?;

            if exists.is_none() {
                debug!("Skipping unknown tag {} for review {}", tag_id, review_id);
                continue;
            }

            sqlx::query("INSERT INTO review_tags (review_id, tag_id, is_ai_tag) VALUES (?, ?, ?)")
                .bind(review_id)
                .bind(tag_id)
                .bind(false)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::Sqlx)?;
            attached += 1;
        }

        tx.commit().await.map_err(StorageError::Sqlx)?;

        debug!("Attached {} tag(s) to review {}", attached, review_id);

        Ok(review)
    }

    /// List reviews in row order, optionally restricted through
    /// `review_review_tags`
    pub async fn list_reviews(&self, filter: &ReviewFilter) -> StorageResult<Vec<Review>> {
        debug!(
            "Listing reviews (skip: {}, limit: {}, tag_ids: {:?})",
            filter.skip, filter.limit, filter.tag_ids
        );

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, text, is_tagged FROM reviews");

        if !filter.tag_ids.is_empty() {
            let mut ids = filter.tag_ids.clone();
            ids.sort_unstable();
            ids.dedup();

            query.push(
                " WHERE id IN (SELECT review_id FROM review_review_tags WHERE review_tag_id IN (",
            );
            let mut separated = query.separated(", ");
            for id in ids {
                separated.push_bind(id);
            }
            separated.push_unseparated("))");
        }

        query
            .push(" ORDER BY id LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.skip);

        let reviews = query
            .build_query_as::<Review>()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(reviews)
    }

    /// Tag associations of a review, oldest first
    pub async fn list_review_tags(&self, review_id: i64) -> StorageResult<Vec<ReviewTag>> {
        debug!("Fetching tag associations for review: {}", review_id);

        let review_tags = sqlx::query_as::<_, ReviewTag>(
            "SELECT id, is_ai_tag, tag_id, review_id FROM review_tags WHERE review_id = ? ORDER BY id",
        )
        .bind(review_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(review_tags)
    }
}
