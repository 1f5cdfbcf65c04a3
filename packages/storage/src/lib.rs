// ABOUTME: Data layer and persistence for the review-tag service
// ABOUTME: Shared storage error type, SQLite pool setup and schema migrations

use thiserror::Error;

pub mod pool;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use pool::{close_pool, connect, run_migrations, PoolConfig, MIGRATOR};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    /// Carries the entity kind, e.g. "Review" or "Tag"
    #[error("{0} not found")]
    NotFound(String),
}

impl StorageError {
    pub fn not_found(kind: impl Into<String>) -> Self {
        StorageError::NotFound(kind.into())
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
