//! Persistence layer - the `BookmarkStore` seam and its backends
//!
//! # Design Principles
//!
//! - One trait, two interchangeable backends (PostgreSQL, in-memory)
//! - Every operation touches a single record and auto-commits
//! - "Not found" is a value (`None` / 0 rows), never an error, at this layer
//! - Concurrency control is left to the backend (row locks / RwLock)

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use memory::MemoryBookmarkStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgBookmarkStore;
pub use store::{BookmarkStore, StoreError};
