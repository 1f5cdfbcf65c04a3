// ABOUTME: HTTP API layer for the review-tag service providing REST endpoints and routing
// ABOUTME: Integration layer over the review and tag storage packages

use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod db;
pub mod error;
pub mod extract;
pub mod health;
pub mod reviews_handlers;
pub mod tags_handlers;
pub mod validation;

pub use db::DbState;
pub use error::ApiError;

/// Creates the reviews API router
pub fn create_reviews_router() -> Router<DbState> {
    Router::new()
        .route("/", get(reviews_handlers::list_reviews))
        .route("/", post(reviews_handlers::create_review))
        .route("/{review_id}/tags", post(reviews_handlers::attach_tags))
}

/// Creates the tags API router
pub fn create_tags_router() -> Router<DbState> {
    Router::new()
        .route("/", post(tags_handlers::create_tag))
        .route("/{tag_id}", delete(tags_handlers::delete_tag))
}

/// Assemble the full application router
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/reviews", create_reviews_router())
        .nest("/tags", create_tags_router())
        .with_state(db)
}
