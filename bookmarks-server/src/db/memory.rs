//! In-memory bookmark store
//!
//! Owned by whoever constructs it and injected like any other backend.
//! Ids start at 1, increase monotonically and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookmarkStore, StoreError};
use crate::models::{Bookmark, BookmarkPatch, NewBookmark};

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, Bookmark>,
}

/// Bookmark store kept in process memory
#[derive(Default)]
pub struct MemoryBookmarkStore {
    inner: RwLock<Inner>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.records.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(&id).cloned())
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let bookmark = Bookmark::from_new(inner.next_id, new);
        inner.records.insert(bookmark.id, bookmark.clone());
        Ok(bookmark)
    }

    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.records.get_mut(&id) {
            Some(bookmark) => {
                patch.apply_to(bookmark);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.records.remove(&id).map_or(0, |_| 1))
    }
}
