// ABOUTME: HTTP request handlers for review operations
// ABOUTME: Creates reviews, attaches tags and lists reviews with an optional filter

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Deserialize;
use tracing::info;

use crate::db::DbState;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidPath};
use crate::validation::{parse_list_query, validate_review_text};
use rtag_reviews::ReviewCreateInput;

/// Request body for creating a review
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub is_tagged: bool,
}

/// Request body for attaching tags to a review
#[derive(Debug, Deserialize)]
pub struct AttachTagsRequest {
    pub tag_ids: Vec<i64>,
}

/// List reviews
pub async fn list_reviews(
    State(db): State<DbState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let filter = match parse_list_query(query.as_deref()) {
        Ok(filter) => filter,
        Err(e) => return e.into_response(),
    };

    info!(
        "Listing reviews (skip: {}, limit: {}, tag_ids: {:?})",
        filter.skip, filter.limit, filter.tag_ids
    );

    match db.review_storage.list_reviews(&filter).await {
        Ok(reviews) => (StatusCode::OK, ResponseJson(reviews)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Create a new review
pub async fn create_review(
    State(db): State<DbState>,
    ValidJson(request): ValidJson<CreateReviewRequest>,
) -> impl IntoResponse {
    info!("Creating review (is_tagged: {})", request.is_tagged);

    let text = match validate_review_text(&request.text) {
        Ok(text) => text,
        Err(e) => return e.into_response(),
    };

    let input = ReviewCreateInput {
        text,
        is_tagged: request.is_tagged,
    };

    match db.review_storage.create_review(input).await {
        Ok(review) => (StatusCode::OK, ResponseJson(review)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Attach existing tags to a review; unknown tag ids are skipped
pub async fn attach_tags(
    State(db): State<DbState>,
    ValidPath(review_id): ValidPath<i64>,
    ValidJson(request): ValidJson<AttachTagsRequest>,
) -> impl IntoResponse {
    info!(
        "Attaching tags {:?} to review: {}",
        request.tag_ids, review_id
    );

    match db
        .review_storage
        .attach_tags(review_id, &request.tag_ids)
        .await
    {
        Ok(review) => (StatusCode::OK, ResponseJson(review)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
