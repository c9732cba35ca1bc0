//! bookmarks-server: validated CRUD over a single bookmark resource
//!
//! Request flow: HTTP boundary -> `BookmarkService` -> validator ->
//! `BookmarkStore` -> sanitizer -> JSON response.

pub mod db;
pub mod http;
pub mod models;
pub mod sanitize;
pub mod service;

pub use db::{BookmarkStore, MemoryBookmarkStore, PgBookmarkStore, StoreError};
pub use http::{build_router, run_server, ServerConfig};
pub use service::{BookmarkService, ServiceError};
