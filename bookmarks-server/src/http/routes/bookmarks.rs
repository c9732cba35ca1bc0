//! Bookmark endpoints
//!
//! Thin mapping from HTTP onto `BookmarkService`; every rule lives in the
//! service and the models.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{BookmarkId, JsonPayload};
use crate::http::server::AppState;
use crate::models::Bookmark;

/// GET /bookmarks - list all bookmarks
async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

/// POST /bookmarks - create a bookmark, 201 + Location
async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    JsonPayload(payload): JsonPayload,
) -> Result<impl IntoResponse, ApiError> {
    let bookmark = state.service.create(&payload).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), bookmark.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(bookmark),
    ))
}

/// GET /bookmarks/{id} - get a single bookmark
async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    BookmarkId(id): BookmarkId,
) -> Result<Json<Bookmark>, ApiError> {
    Ok(Json(state.service.get(id).await?))
}

/// PATCH /bookmarks/{id} - merge supplied fields, 204
async fn update_bookmark(
    State(state): State<Arc<AppState>>,
    BookmarkId(id): BookmarkId,
    JsonPayload(payload): JsonPayload,
) -> Result<StatusCode, ApiError> {
    state.service.update(id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /bookmarks/{id} - remove, 204
async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    BookmarkId(id): BookmarkId,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bookmark routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark)
                .patch(update_bookmark)
                .delete(delete_bookmark),
        )
}
