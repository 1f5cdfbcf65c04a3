// ABOUTME: Input validation for API request handlers
// ABOUTME: Field length checks and list query parsing

use rtag_reviews::{ReviewFilter, MAX_REVIEW_TEXT_LEN};
use rtag_tags::MAX_TAG_NAME_LEN;

use crate::error::ApiError;

/// Validate review text. The text is stored as given.
pub fn validate_review_text(text: &str) -> Result<String, ApiError> {
    if text.is_empty() {
        return Err(ApiError::Validation(
            "Review text cannot be empty".to_string(),
        ));
    }

    let len = text.chars().count();
    if len > MAX_REVIEW_TEXT_LEN {
        return Err(ApiError::Validation(format!(
            "Review text exceeds maximum length of {} characters (got {})",
            MAX_REVIEW_TEXT_LEN, len
        )));
    }

    Ok(text.to_string())
}

/// Validate a tag name. Blank names are rejected; the name is stored as given.
pub fn validate_tag_name(name: &str) -> Result<String, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("Tag name cannot be empty".to_string()));
    }

    let len = name.chars().count();
    if len > MAX_TAG_NAME_LEN {
        return Err(ApiError::Validation(format!(
            "Tag name exceeds maximum length of {} characters (got {})",
            MAX_TAG_NAME_LEN, len
        )));
    }

    Ok(name.to_string())
}

/// Parse the review list query string.
///
/// `tag_ids` may repeat and is also accepted as `tag_ids[]`. Unknown keys are
/// ignored; for repeated `skip`/`limit` the last value wins.
pub fn parse_list_query(raw: Option<&str>) -> Result<ReviewFilter, ApiError> {
    let mut filter = ReviewFilter::default();

    let Some(raw) = raw else {
        return Ok(filter);
    };

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "skip" => {
                let skip = parse_int("skip", &value)?;
                if skip < 0 {
                    return Err(ApiError::Validation(
                        "skip cannot be negative".to_string(),
                    ));
                }
                filter.skip = skip;
            }
            "limit" => {
                let limit = parse_int("limit", &value)?;
                if limit < 1 {
                    return Err(ApiError::Validation(
                        "limit must be at least 1".to_string(),
                    ));
                }
                filter.limit = limit;
            }
            "tag_ids" | "tag_ids[]" => {
                filter.tag_ids.push(parse_int("tag_ids", &value)?);
            }
            _ => {}
        }
    }

    Ok(filter)
}

fn parse_int(field: &str, value: &str) -> Result<i64, ApiError> {
    value.trim().parse::<i64>().map_err(|_| {
        ApiError::Validation(format!("{} must be an integer, got '{}'", field, value))
    })
}
