//! Recommender session
//!
//! Draws a random book matching the selected genre and length, and
//! remembers the current pick so it can be saved to the reading list.

use rand::Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{ReadifyError, Result};
use crate::models::{Book, Genre, Length, Selection};
use crate::query::{filter_by_genre_and_length, pick_random};

/// Stateful "pick / pick again" session over a catalog
pub struct Recommender<R: Rng> {
    rng: R,
    current: Option<u32>,
}

impl<R: Rng> Recommender<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, current: None }
    }

    /// Draw a new recommendation
    ///
    /// On `Empty` the previous pick is discarded.
    pub fn pick<'a>(
        &mut self,
        catalog: &'a Catalog,
        genre: Selection<Genre>,
        length: Selection<Length>,
    ) -> Result<&'a Book> {
        let candidates = filter_by_genre_and_length(catalog.all_books(), genre, length);
        match pick_random(&candidates, &mut self.rng) {
            Ok(book) => {
                debug!(
                    "Picked book {} from {} candidate(s)",
                    book.id,
                    candidates.len()
                );
                self.current = Some(book.id);
                Ok(*book)
            }
            Err(e) => {
                self.current = None;
                Err(e)
            }
        }
    }

    /// Id of the current pick, if any
    pub fn current(&self) -> Option<u32> {
        self.current
    }

    /// The current pick, or `NoSelection` if nothing has been picked
    pub fn current_book<'a>(&self, catalog: &'a Catalog) -> Result<&'a Book> {
        let id = self.current.ok_or(ReadifyError::NoSelection)?;
        catalog.find_by_id(id)
    }
}
