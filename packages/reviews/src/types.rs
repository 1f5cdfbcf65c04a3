// ABOUTME: Review type definitions
// ABOUTME: Reviews, the two association records and list filter parameters

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Longest review text the schema accepts, in characters
pub const MAX_REVIEW_TEXT_LEN: usize = 2048;

/// Page size used when a caller does not ask for one
pub const DEFAULT_LIST_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub text: String,
    pub is_tagged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreateInput {
    pub text: String,
    pub is_tagged: bool,
}

/// A tag applied to a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ReviewTag {
    pub id: i64,
    pub is_ai_tag: bool,
    pub tag_id: i64,
    pub review_id: i64,
}

/// Links a review to a [`ReviewTag`] record rather than to a tag.
///
/// Nothing in the service writes these rows; only [`ReviewFilter::tag_ids`]
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ReviewReviewTag {
    pub id: i64,
    pub review_id: i64,
    pub review_tag_id: i64,
}

/// Offset, page size and optional association filter for listing reviews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFilter {
    pub skip: i64,
    pub limit: i64,
    /// Matched against `review_review_tags.review_tag_id`, i.e. review tag
    /// record ids. Empty means no filtering.
    pub tag_ids: Vec<i64>,
}

impl Default for ReviewFilter {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
            tag_ids: Vec::new(),
        }
    }
}
