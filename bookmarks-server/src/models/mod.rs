//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod title;
pub mod rating;
pub mod bookmark;
pub mod payload;

pub use validation::ValidationError;
pub use title::BookmarkTitle;
pub use rating::Rating;
pub use bookmark::{Bookmark, BookmarkPatch, NewBookmark};
pub use payload::{validate_create, validate_update, Payload};
