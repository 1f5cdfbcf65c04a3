// ABOUTME: Request extractors that report malformed input as validation errors
// ABOUTME: Wraps axum's JSON and path extractors with the API error type

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::ApiError;

/// JSON body whose rejection is an [`ApiError::Validation`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

/// Path parameters whose rejection is an [`ApiError::Validation`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ValidPath<T>(pub T);
