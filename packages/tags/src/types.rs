// ABOUTME: Tag type definitions
// ABOUTME: Structures for named labels applied to reviews

use serde::{Deserialize, Serialize};

/// Longest tag name the schema accepts, in characters
pub const MAX_TAG_NAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreateInput {
    pub name: String,
}
