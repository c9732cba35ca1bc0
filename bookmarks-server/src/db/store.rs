//! Storage trait shared by every backend

use async_trait::async_trait;

use crate::models::{Bookmark, BookmarkPatch, NewBookmark};

/// Storage failure (connection loss, constraint violation, ...)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence gateway for bookmarks.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, update, delete
/// - Validation and sanitization belong in `BookmarkService`, not here
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks, in a stable order (ascending id).
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError>;

    /// A single bookmark, or `None` if no record has this id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError>;

    /// Persist a new bookmark and return it with its assigned id.
    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError>;

    /// Merge the supplied fields into the record. Returns rows affected (0 or 1).
    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, StoreError>;

    /// Remove the record. Returns rows affected (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}
