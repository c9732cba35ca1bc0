//! Bookmark title validation

use super::ValidationError;

/// Minimum length for bookmark titles
const MIN_TITLE_LEN: usize = 3;

/// Maximum length for bookmark titles
const MAX_TITLE_LEN: usize = 100;

/// Validated bookmark title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTitle(String);

impl BookmarkTitle {
    /// Create a new bookmark title.
    ///
    /// # Rules
    /// - Between 3 and 100 UTF-16 code units, inclusive (an emoji counts as 2)
    /// - Stored verbatim (no trimming, no escaping)
    ///
    /// # Example
    /// ```
    /// use bookmarks_server::models::BookmarkTitle;
    ///
    /// assert!(BookmarkTitle::new("Rust docs").is_ok());
    /// assert!(BookmarkTitle::new("hi").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let len = s.encode_utf16().count();
        if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&len) {
            return Err(ValidationError::InvalidTitleLength);
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BookmarkTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
