//! Storage layer
//!
//! Handles persistence of per-user state.
//!
//! ## Architecture
//!
//! - **Backend**: a flat string key-value store (`KeyValueStore`)
//! - **Persistence**: typed JSON reads and writes on top of a backend
//!
//! Each entity type owns exactly one key (see [`keys`]).

pub mod adapter;
pub mod backend;
pub mod error;
pub mod schema;

pub use adapter::Persistence;
pub use backend::{KeyValueStore, MemoryStore, SqliteStore};
pub use error::{StorageError, StorageResult};
pub use schema::{init_schema, needs_init, SCHEMA_VERSION};

/// Keys owned by each persisted entity
pub mod keys {
    pub const DARK_MODE: &str = "readifyDarkMode";
    pub const STREAK: &str = "readifyStreak";
    pub const NEWSLETTER_EMAIL: &str = "newsletterEmail";
    pub const READING_PROGRESS: &str = "readingProgress";
    pub const READING_LIST: &str = "readingList";
    pub const COMPLETED_BOOKS: &str = "completedBooks";
    pub const FEEDBACK_LIST: &str = "feedbackList";
}
