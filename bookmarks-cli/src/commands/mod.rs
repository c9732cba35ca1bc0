//! Command implementations for the bookmarks CLI

pub mod serve;

pub use serve::run_serve;
