//! Bookmark record and its write-side shapes

use serde::Serialize;
use sqlx::FromRow;

use super::{BookmarkTitle, Rating};

/// Bookmark record as persisted.
///
/// Text fields hold exactly what the client sent; escaping happens on the
/// way out (see [`crate::sanitize`]).
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[sqlx(try_from = "f64")]
    pub rating: Rating,
    pub description: String,
}

impl Bookmark {
    /// Materialize a validated insert under a store-assigned id.
    pub fn from_new(id: i64, new: NewBookmark) -> Self {
        Self {
            id,
            title: new.title.into_string(),
            url: new.url,
            rating: new.rating,
            description: new.description,
        }
    }
}

/// Validated fields for a new bookmark (no id yet)
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub title: BookmarkTitle,
    pub url: String,
    pub rating: Rating,
    pub description: String,
}

/// Validated partial update. `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkPatch {
    pub title: Option<BookmarkTitle>,
    pub url: Option<String>,
    pub rating: Option<Rating>,
    pub description: Option<String>,
}

impl BookmarkPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.rating.is_none()
            && self.description.is_none()
    }

    /// Merge the supplied fields into an existing record.
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.as_str().to_owned();
        }
        if let Some(url) = &self.url {
            bookmark.url = url.clone();
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
        if let Some(description) = &self.description {
            bookmark.description = description.clone();
        }
    }
}
