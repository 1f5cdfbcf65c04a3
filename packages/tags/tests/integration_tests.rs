// ABOUTME: Integration tests for tag storage operations
// ABOUTME: Tests creation, lookup and cascading deletion of tags

use pretty_assertions::assert_eq;
use rtag_storage::{testing::memory_pool, StorageError};
use rtag_tags::{Tag, TagCreateInput, TagStorage};
use sqlx::SqlitePool;

fn input(name: &str) -> TagCreateInput {
    TagCreateInput {
        name: name.to_string(),
    }
}

/// Insert a review and link it to `tag_id`, returning the review id
async fn link_review(pool: &SqlitePool, tag_id: i64) -> i64 {
    let review_id = sqlx::query("INSERT INTO reviews (text, is_tagged) VALUES ('Great', 0)")
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid();

    sqlx::query("INSERT INTO review_tags (review_id, tag_id) VALUES (?, ?)")
        .bind(review_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();

    review_id
}

async fn count_links(pool: &SqlitePool, tag_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM review_tags WHERE tag_id = ?")
        .bind(tag_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_tag() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool);

    let tag = storage.create_tag(input("TestTag")).await.unwrap();

    assert_eq!(tag.name, "TestTag");
    assert!(tag.id > 0);
}

#[tokio::test]
async fn test_duplicate_tag_names_are_allowed() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool);

    let first = storage.create_tag(input("Shipping")).await.unwrap();
    let second = storage.create_tag(input("Shipping")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, second.name);
}

#[tokio::test]
async fn test_get_tag() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool);

    let created = storage.create_tag(input("Bug")).await.unwrap();
    let retrieved = storage.get_tag(created.id).await.unwrap();

    assert_eq!(retrieved, created);
}

#[tokio::test]
async fn test_get_missing_tag_is_not_found() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool);

    let err = storage.get_tag(42).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(ref kind) if kind == "Tag"));
    assert_eq!(err.to_string(), "Tag not found");
}

#[tokio::test]
async fn test_delete_missing_tag_is_not_found() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool);

    let result = storage.delete_tag(7).await;
    assert!(matches!(result, Err(StorageError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_tag_returns_prior_values() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool);

    let created = storage.create_tag(input("Obsolete")).await.unwrap();
    let deleted = storage.delete_tag(created.id).await.unwrap();

    assert_eq!(
        deleted,
        Tag {
            id: created.id,
            name: "Obsolete".to_string()
        }
    );
    assert!(matches!(
        storage.get_tag(created.id).await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_tag_removes_review_associations() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool.clone());

    let doomed = storage.create_tag(input("Doomed")).await.unwrap();
    let kept = storage.create_tag(input("Kept")).await.unwrap();

    link_review(&pool, doomed.id).await;
    link_review(&pool, doomed.id).await;
    link_review(&pool, kept.id).await;

    storage.delete_tag(doomed.id).await.unwrap();

    assert_eq!(count_links(&pool, doomed.id).await, 0);
    assert_eq!(count_links(&pool, kept.id).await, 1);

    // Reviews themselves are untouched
    let reviews: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(reviews, 3);
}

#[tokio::test]
async fn test_delete_tag_twice() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool);

    let tag = storage.create_tag(input("Once")).await.unwrap();
    storage.delete_tag(tag.id).await.unwrap();

    assert!(matches!(
        storage.delete_tag(tag.id).await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_failed_delete_keeps_review_associations() {
    let pool = memory_pool().await;
    let storage = TagStorage::new(pool.clone());

    let tag = storage.create_tag(input("Sticky")).await.unwrap();
    link_review(&pool, tag.id).await;

    // Fails the tag delete after the association delete has already run
    sqlx::query(
        "CREATE TRIGGER block_tag_delete BEFORE DELETE ON tags \
         BEGIN SELECT RAISE(ABORT, 'tag delete blocked'); END",
    )
    .execute(&pool)
    .await
    .unwrap();

    assert!(storage.delete_tag(tag.id).await.is_err());

    assert_eq!(count_links(&pool, tag.id).await, 1);
    assert_eq!(storage.get_tag(tag.id).await.unwrap(), tag);
}
