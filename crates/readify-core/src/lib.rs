//! Readify Core Library
//!
//! This crate provides the core functionality for Readify, a small
//! book-discovery tool: a fixed catalog, pure queries over it, and the
//! reader's locally persisted state.
//!
//! # Architecture
//!
//! - **Catalog**: read-only list of books, populated once
//! - **Queries**: text/genre/length filters and a random pick
//! - **Storage**: typed JSON values over a flat key-value store
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open(&Config::load()?)?;
//!
//! // Browse
//! let hits = filter_by_text_and_genre(store.catalog().all_books(), "potter", Selection::All);
//!
//! // Track
//! store.touch_streak()?;
//! store.save_progress(&ProgressForm::new("300", "120", "20"))?;
//! ```
//!
//! # Modules
//!
//! - `store`: Unified per-user state interface (main entry point)
//! - `catalog`: The built-in book list
//! - `query`: Catalog filters and random pick
//! - `recommend`: Stateful recommender session
//! - `progress`: Reading-progress calculation
//! - `streak`: Daily visit streak
//! - `feedback`: Feedback form validation
//! - `storage`: Key-value backends and JSON persistence
//! - `offline`: Offline asset cache lifecycle
//! - `daily`: Author of the day and quote rotation
//! - `focus`: Ambient sound selection
//! - `clock`: Injectable date source
//! - `config`: Application configuration

pub mod catalog;
pub mod clock;
pub mod config;
pub mod daily;
pub mod error;
pub mod feedback;
pub mod focus;
pub mod models;
pub mod offline;
pub mod progress;
pub mod query;
pub mod recommend;
pub mod storage;
pub mod store;
pub mod streak;

pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{ReadifyError, Result};
pub use feedback::FeedbackDraft;
pub use models::{
    Book, FeedbackEntry, Genre, Length, ProgressRecord, ReadingListEntry, Review, Selection,
    StreakRecord,
};
pub use progress::{compute_progress, ProgressForm, ProgressReport};
pub use query::{filter_by_genre_and_length, filter_by_text_and_genre, pick_random};
pub use recommend::Recommender;
pub use storage::{KeyValueStore, MemoryStore, Persistence, SqliteStore, StorageError};
pub use store::Store;
pub use streak::compute_streak;
