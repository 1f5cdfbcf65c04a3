// ABOUTME: Tag management for labelling reviews
// ABOUTME: Provides types and storage layer for tags

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::TagStorage;
pub use types::{Tag, TagCreateInput, MAX_TAG_NAME_LEN};
