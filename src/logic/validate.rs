//! Submission gate for draft questions.

use std::fmt;

/// Minimum number of characters a trimmed question must contain.
pub const MIN_QUERY_CHARS: usize = 5;

/// Message shown when a draft is too short to submit.
pub const VALIDATION_MESSAGE: &str = "Please enter a more specific cardiac health question";

/// What: Local rejection of a draft that must never reach the network.
///
/// Details:
/// - Carries no payload; the rejection reason is always "too short".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationError;

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VALIDATION_MESSAGE)
    }
}

impl std::error::Error for ValidationError {}

/// What: Decide whether a raw draft may be submitted.
///
/// Inputs:
/// - `raw`: Draft text exactly as typed, including surrounding whitespace.
///
/// Output:
/// - `Ok(trimmed)` when the trimmed text has at least [`MIN_QUERY_CHARS`] characters.
///
/// # Errors
/// - Returns `Err(ValidationError)` when the trimmed text is shorter than [`MIN_QUERY_CHARS`].
///
/// Details:
/// - Length is counted in Unicode scalar values, not bytes.
/// - No content filtering is performed.
pub fn validate_query(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return Err(ValidationError);
    }
    Ok(trimmed)
}
