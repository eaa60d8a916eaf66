//! Field-level validation for content create/update payloads.
//!
//! Handlers call these before touching the repository layer so a rejected
//! write never reaches the store.

use crate::error::CoreError;

/// Reject an empty or whitespace-only required field.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// For partial updates: a supplied value must still be non-empty; an omitted
/// value is left unchanged and passes.
pub fn require_non_empty_if_present(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), CoreError> {
    match value {
        Some(v) => require_non_empty(field, v),
        None => Ok(()),
    }
}

/// Testimonial ratings are a 1-5 star scale.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(1..=5).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "rating must be between 1 and 5, got {rating}"
        )));
    }
    Ok(())
}

/// URL-safe slugs: lowercase alphanumerics, hyphens, underscores.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("slug must not be empty".into()));
    }
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        return Err(CoreError::Validation(format!(
            "slug may only contain lowercase letters, digits, '-' and '_': {slug}"
        )));
    }
    Ok(())
}
