//! PostgreSQL bookmark store
//!
//! Single-statement queries only:
//! - update: one `UPDATE ... SET` built from the supplied columns
//! - insert: `INSERT ... RETURNING` so the assigned id comes back in one trip

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{BookmarkStore, StoreError};
use crate::models::{Bookmark, BookmarkPatch, NewBookmark};

/// `rating` is stored as NUMERIC and read back as float8.
const COLUMNS: &str = "id, title, url, rating::float8 AS rating, description";

/// Bookmark store backed by the `bookmarks` table
#[derive(Clone)]
pub struct PgBookmarkStore {
    pool: PgPool,
}

impl PgBookmarkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {COLUMNS} FROM bookmarks ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(bookmarks)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {COLUMNS} FROM bookmarks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bookmark)
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            "INSERT INTO bookmarks (title, url, rating, description) \
             VALUES ($1, $2, $3::numeric, $4) \
             RETURNING {COLUMNS}"
        ))
        .bind(new.title.as_str())
        .bind(&new.url)
        .bind(new.rating.value())
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(bookmark)
    }

    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, StoreError> {
        if patch.is_empty() {
            // Nothing to SET; report whether the row exists so callers still see 0 vs 1.
            return Ok(self.get_by_id(id).await?.map_or(0, |_| 1));
        }

        let mut query = QueryBuilder::<Postgres>::new("UPDATE bookmarks SET ");
        let mut columns = query.separated(", ");
        if let Some(title) = &patch.title {
            columns.push("title = ").push_bind_unseparated(title.as_str());
        }
        if let Some(url) = &patch.url {
            columns.push("url = ").push_bind_unseparated(url.as_str());
        }
        if let Some(rating) = patch.rating {
            columns
                .push("rating = ")
                .push_bind_unseparated(rating.value())
                .push_unseparated("::numeric");
        }
        if let Some(description) = &patch.description {
            columns
                .push("description = ")
                .push_bind_unseparated(description.as_str());
        }
        query.push(" WHERE id = ").push_bind(id);

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
