//! Field validation shared by the record types.
//!
//! SQLite ignores `VARCHAR(n)` lengths, so the caps declared by the schema
//! are enforced here when values enter the domain. Content is otherwise
//! free-form, so blank values are accepted.

use thiserror::Error;

/// Validation errors returned by record field constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordValidationError {
    /// The field exceeds its storage cap.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum allowed length in characters.
        max: usize,
    },
}

/// Check `value` is at most `max` characters long.
pub(crate) fn bounded_text(
    field: &'static str,
    value: String,
    max: usize,
) -> Result<String, RecordValidationError> {
    if value.chars().count() > max {
        return Err(RecordValidationError::TooLong { field, max });
    }
    Ok(value)
}
