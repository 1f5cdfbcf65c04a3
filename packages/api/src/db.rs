// ABOUTME: Database handle shared by all request handlers
// ABOUTME: Owns the SQLite pool and the storage layers built on it

use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

use rtag_reviews::ReviewStorage;
use rtag_storage::{PoolConfig, StorageResult};
use rtag_tags::TagStorage;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub review_storage: Arc<ReviewStorage>,
    pub tag_storage: Arc<TagStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let review_storage = Arc::new(ReviewStorage::new(pool.clone()));
        let tag_storage = Arc::new(TagStorage::new(pool.clone()));

        Self {
            pool,
            review_storage,
            tag_storage,
        }
    }

    /// Open the database described by `config`, creating the schema if absent
    pub async fn init(config: &PoolConfig) -> StorageResult<Self> {
        let pool = rtag_storage::connect(config).await?;
        info!(
            "Database ready at {} (max connections: {})",
            config.database_path.display(),
            config.max_connections
        );
        Ok(Self::new(pool))
    }

    /// Close the pool once in-flight requests have released their connections
    pub async fn close(&self) {
        rtag_storage::close_pool(&self.pool).await;
    }
}
