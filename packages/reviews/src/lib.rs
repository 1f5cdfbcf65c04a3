// ABOUTME: Reviews and their tag associations
// ABOUTME: Provides types and storage for reviews, review tags and list filtering

pub mod storage;
pub mod types;

pub use storage::ReviewStorage;
pub use types::{
    Review, ReviewCreateInput, ReviewFilter, ReviewReviewTag, ReviewTag, DEFAULT_LIST_LIMIT,
    MAX_REVIEW_TEXT_LEN,
};
