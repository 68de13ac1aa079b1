//! Input validation for joke writes.

use crate::error::CoreError;

/// Message returned whenever a write is missing its punchline.
pub const PUNCHLINE_REQUIRED: &str = "Required attribute 'punchline' not provided";

/// Validation error for a missing or blank punchline.
pub fn punchline_required() -> CoreError {
    CoreError::Validation(PUNCHLINE_REQUIRED.to_string())
}

/// Check a punchline submitted for creation.
///
/// The value must be present and contain at least one non-whitespace
/// character. The original (untrimmed) text is returned on success.
pub fn validate_punchline(punchline: Option<&str>) -> Result<&str, CoreError> {
    match punchline {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(punchline_required()),
    }
}
