// ABOUTME: HTTP request handlers for tag operations
// ABOUTME: Handles tag creation and cascading deletion

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Deserialize;
use tracing::info;

use crate::db::DbState;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidPath};
use crate::validation::validate_tag_name;
use rtag_tags::TagCreateInput;

/// Request body for creating a tag
#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

/// Create a new tag
pub async fn create_tag(
    State(db): State<DbState>,
    ValidJson(request): ValidJson<CreateTagRequest>,
) -> impl IntoResponse {
    info!("Creating tag: {}", request.name);

    let name = match validate_tag_name(&request.name) {
        Ok(name) => name,
        Err(e) => return e.into_response(),
    };

    match db.tag_storage.create_tag(TagCreateInput { name }).await {
        Ok(tag) => (StatusCode::OK, ResponseJson(tag)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Delete a tag and its review associations, returning the deleted tag
pub async fn delete_tag(
    State(db): State<DbState>,
    ValidPath(tag_id): ValidPath<i64>,
) -> impl IntoResponse {
    info!("Deleting tag: {}", tag_id);

    match db.tag_storage.delete_tag(tag_id).await {
        Ok(tag) => (StatusCode::OK, ResponseJson(tag)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
