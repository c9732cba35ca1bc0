//! Validation error types

/// Validation error for bookmark payloads.
///
/// The `Display` text is the exact message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is absent or null
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    /// Title is shorter than 3 or longer than 100 characters
    #[error("Title must be between 3 and 100 characters")]
    InvalidTitleLength,

    /// Rating is not numeric or outside 1..=5
    #[error("Rating must be a number between 1 and 5")]
    InvalidRating,

    /// Partial update supplied none of the updatable fields
    #[error("Request body must contain either title, url, description or rating")]
    EmptyUpdate,

    /// Text field carried a non-string JSON value
    #[error("'{field}' must be a string")]
    InvalidType { field: &'static str },
}
