use super::ApiError;
use crate::db::SortSpec;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// A lookup key must be a single token.
pub fn validate_word(word: &str) -> Result<&str, ApiError> {
    if word.is_empty() {
        return Err(ApiError::validation("Word cannot be empty"));
    }

    if word.chars().any(char::is_whitespace) {
        return Err(ApiError::validation("Must be just a single word"));
    }

    Ok(word)
}

/// Language codes are exactly two ASCII letters, lowercased before use
/// and storage.
pub fn validate_language_code(param: &str, raw: &str) -> Result<String, ApiError> {
    if raw.len() != 2 || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ApiError::validation(format!(
            "Invalid {param}: '{raw}'. Must be a two-letter language code"
        )));
    }

    Ok(raw.to_ascii_lowercase())
}

pub fn validate_limit(limit: u64) -> Result<u64, ApiError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::validation(format!(
            "Invalid limit: {limit}. Limit must be between 1 and {MAX_LIMIT}"
        )));
    }
    Ok(limit)
}

pub fn validate_is_full(is_full: u8) -> Result<bool, ApiError> {
    match is_full {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(ApiError::validation(format!(
            "Invalid is_full: {other}. Set 1 for the full view, 0 for the short view"
        ))),
    }
}

pub fn validate_sort(raw: &str) -> Result<SortSpec, ApiError> {
    SortSpec::parse(raw).ok_or_else(|| {
        let name = raw.strip_prefix('-').unwrap_or(raw);
        ApiError::validation(format!("Unknown sort field: '{name}'"))
    })
}
