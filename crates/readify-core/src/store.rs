//! Unified storage interface
//!
//! The `Store` pairs the read-only catalog with the user's persisted state
//! and exposes one typed operation per feature:
//!
//! - preferences (dark mode, newsletter email)
//! - daily streak
//! - saved reading progress
//! - reading list and completed books
//! - feedback log
//!
//! Every mutation is a whole-value read-modify-write of a single key.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open(&config)?;
//! let streak = store.touch_streak()?;
//! store.save_id_to_reading_list(4)?;
//! ```

use anyhow::{Context, Result as AnyResult};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{ReadifyError, Result};
use crate::feedback::FeedbackDraft;
use crate::models::{Book, FeedbackEntry, ProgressRecord, ReadingListEntry, StreakRecord};
use crate::progress::ProgressForm;
use crate::storage::{keys, KeyValueStore, Persistence, SqliteStore};
use crate::streak;

/// Catalog plus per-user state over a key-value backend
pub struct Store<S: KeyValueStore = SqliteStore> {
    catalog: Catalog,
    persistence: Persistence<S>,
    clock: Box<dyn Clock>,
}

impl Store<SqliteStore> {
    /// Open the on-disk store described by `config`
    pub fn open(config: &Config) -> AnyResult<Self> {
        let path = config.store_path();
        let backend = SqliteStore::open(&path)
            .with_context(|| format!("Failed to open store at {:?}", path))?;
        Ok(Self::with_backend(backend, Box::new(SystemClock)))
    }

    /// Size of the backing database file in bytes
    pub fn file_size(&self) -> u64 {
        self.persistence.backend().file_size()
    }
}

impl<S: KeyValueStore> Store<S> {
    /// Build a store over any backend with the built-in catalog
    pub fn with_backend(backend: S, clock: Box<dyn Clock>) -> Self {
        Self::with_catalog(Catalog::builtin(), backend, clock)
    }

    pub fn with_catalog(catalog: Catalog, backend: S, clock: Box<dyn Clock>) -> Self {
        Self {
            catalog,
            persistence: Persistence::new(backend),
            clock,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Keys that currently hold a value
    pub fn stored_keys(&self) -> Result<Vec<String>> {
        Ok(self.persistence.backend().keys()?)
    }

    // ==================== Preferences ====================

    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.persistence.read_json(keys::DARK_MODE, false)?)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        self.persistence.write_json(keys::DARK_MODE, &enabled)?;
        debug!("Dark mode set to {}", enabled);
        Ok(())
    }

    /// Flip dark mode and return the new setting
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let enabled = !self.dark_mode()?;
        self.set_dark_mode(enabled)?;
        Ok(enabled)
    }

    /// Remember the newsletter subscription address
    pub fn subscribe_newsletter(&mut self, email: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ReadifyError::invalid("Please enter your email."));
        }
        self.persistence.write_json(keys::NEWSLETTER_EMAIL, email)?;
        info!("Subscribed newsletter address");
        Ok(())
    }

    pub fn newsletter_email(&self) -> Result<Option<String>> {
        Ok(self.persistence.read_json(keys::NEWSLETTER_EMAIL, None)?)
    }

    // ==================== Streak ====================

    /// The saved streak, without counting a visit
    pub fn streak(&self) -> Result<Option<StreakRecord>> {
        Ok(self.persistence.read_json(keys::STREAK, None)?)
    }

    /// Count a visit today and return the resulting streak
    ///
    /// Writes only when the record changes.
    pub fn touch_streak(&mut self) -> Result<StreakRecord> {
        let saved = self.streak()?;
        let updated = streak::advance(self.clock.today(), saved);

        if saved != Some(updated) {
            self.persistence.write_json(keys::STREAK, &updated)?;
            info!("Streak now {} day(s)", updated.count);
        }
        Ok(updated)
    }

    // ==================== Progress ====================

    /// Validate the tracker fields and overwrite the saved progress
    pub fn save_progress(&mut self, form: &ProgressForm) -> Result<ProgressRecord> {
        let record = form.to_record()?;
        self.persistence.write_json(keys::READING_PROGRESS, &record)?;
        debug!("Saved progress: {}", record.summary());
        Ok(record)
    }

    pub fn saved_progress(&self) -> Result<Option<ProgressRecord>> {
        Ok(self.persistence.read_json(keys::READING_PROGRESS, None)?)
    }

    // ==================== Reading list ====================

    /// Save a book to the reading list
    ///
    /// Returns false if the book was already on the list.
    pub fn save_to_reading_list(&mut self, book: &Book) -> Result<bool> {
        let added = self.persistence.append_unique(
            keys::READING_LIST,
            ReadingListEntry::from(book),
            |entry: &ReadingListEntry| entry.id,
        )?;
        if added {
            info!("Added book {} to reading list", book.id);
        }
        Ok(added)
    }

    /// Save a catalog book by id
    pub fn save_id_to_reading_list(&mut self, id: u32) -> Result<bool> {
        let book = self.catalog.find_by_id(id)?.clone();
        self.save_to_reading_list(&book)
    }

    pub fn reading_list(&self) -> Result<Vec<ReadingListEntry>> {
        Ok(self.persistence.read_json_or_default(keys::READING_LIST)?)
    }

    // ==================== Completed books ====================

    /// Record a finished title
    ///
    /// Blank titles are ignored and return false.
    pub fn add_completed(&mut self, title: &str) -> Result<bool> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(false);
        }
        self.persistence
            .append(keys::COMPLETED_BOOKS, title.to_string())?;
        Ok(true)
    }

    pub fn completed_books(&self) -> Result<Vec<String>> {
        Ok(self.persistence.read_json_or_default(keys::COMPLETED_BOOKS)?)
    }

    pub fn clear_completed(&mut self) -> Result<()> {
        self.persistence.clear(keys::COMPLETED_BOOKS)?;
        info!("Cleared completed books");
        Ok(())
    }

    // ==================== Feedback ====================

    /// Validate and append a feedback message
    pub fn submit_feedback(&mut self, draft: FeedbackDraft) -> Result<FeedbackEntry> {
        let entry = draft.into_entry(self.clock.now())?;
        let total = self
            .persistence
            .append(keys::FEEDBACK_LIST, entry.clone())?;
        info!("Stored feedback entry ({} total)", total);
        Ok(entry)
    }

    pub fn feedback(&self) -> Result<Vec<FeedbackEntry>> {
        Ok(self.persistence.read_json_or_default(keys::FEEDBACK_LIST)?)
    }
}
