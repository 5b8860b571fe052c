//! Catalog queries
//!
//! Pure filters over a slice of books plus a uniform random pick. Filters
//! keep a book only if every active predicate holds, and preserve input
//! order.

use rand::Rng;

use crate::error::{ReadifyError, Result};
use crate::models::{Book, Genre, Length, Selection};

/// Keep books matching `genre` whose title or author contains `query`
///
/// The query is trimmed and matched case-insensitively; an empty query
/// matches every book.
pub fn filter_by_text_and_genre<'a>(
    books: &'a [Book],
    query: &str,
    genre: Selection<Genre>,
) -> Vec<&'a Book> {
    let needle = query.trim().to_lowercase();
    books
        .iter()
        .filter(|b| genre.matches(&b.genre) && b.mentions(&needle))
        .collect()
}

/// Keep books matching both `genre` and `length`
pub fn filter_by_genre_and_length<'a>(
    books: &'a [Book],
    genre: Selection<Genre>,
    length: Selection<Length>,
) -> Vec<&'a Book> {
    books
        .iter()
        .filter(|b| genre.matches(&b.genre) && length.matches(&b.length))
        .collect()
}

/// Pick one candidate uniformly at random
///
/// Each call is an independent draw from `rng`.
pub fn pick_random<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(ReadifyError::Empty);
    }
    let index = rng.gen_range(0..candidates.len());
    Ok(&candidates[index])
}
