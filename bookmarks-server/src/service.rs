//! Bookmark service - validate, persist, sanitize
//!
//! Stateless: every call is one pipeline over the injected store. Validation
//! runs before any store call, so a rejected payload never writes anything.
//! Sanitization runs on every bookmark handed back to the caller.

use std::sync::Arc;

use crate::db::{BookmarkStore, StoreError};
use crate::models::{validate_create, validate_update, Bookmark, Payload, ValidationError};
use crate::sanitize::sanitize_bookmark;

/// Outcome of a failed service call
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Bookmark doesn't exist")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Orchestrates Validator -> BookmarkStore -> Sanitizer
#[derive(Clone)]
pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    /// All bookmarks, sanitized. Empty is not an error.
    pub async fn list(&self) -> ServiceResult<Vec<Bookmark>> {
        let bookmarks = self.store.list_all().await?;
        Ok(bookmarks.into_iter().map(sanitize_bookmark).collect())
    }

    pub async fn get(&self, id: i64) -> ServiceResult<Bookmark> {
        self.store
            .get_by_id(id)
            .await?
            .map(sanitize_bookmark)
            .ok_or(ServiceError::NotFound)
    }

    /// Validate and insert. The returned bookmark carries the assigned id.
    pub async fn create(&self, payload: &Payload) -> ServiceResult<Bookmark> {
        let new = validate_create(payload)?;
        let bookmark = self.store.insert(new).await?;
        Ok(sanitize_bookmark(bookmark))
    }

    /// Validate and merge the supplied fields.
    pub async fn update(&self, id: i64, payload: &Payload) -> ServiceResult<()> {
        let patch = validate_update(payload)?;
        match self.store.update(id, &patch).await? {
            0 => Err(ServiceError::NotFound),
            _ => Ok(()),
        }
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        match self.store.delete(id).await? {
            0 => Err(ServiceError::NotFound),
            _ => Ok(()),
        }
    }
}
