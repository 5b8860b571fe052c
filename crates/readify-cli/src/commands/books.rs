//! Browse command handlers

use anyhow::Result;

use readify_core::{
    filter_by_text_and_genre, Genre, KeyValueStore, ReadifyError, Selection, Store,
};

use crate::output::Output;

/// List books matching a title/author query and a genre
pub fn list<S: KeyValueStore>(
    store: &Store<S>,
    query: Option<String>,
    genre: Selection<Genre>,
    output: &Output,
) -> Result<()> {
    let query = query.unwrap_or_default();
    let books = filter_by_text_and_genre(store.catalog().all_books(), &query, genre);
    output.print_books(&books);
    Ok(())
}

/// Show one book's details
pub fn show<S: KeyValueStore>(store: &Store<S>, id: u32, output: &Output) -> Result<()> {
    match store.catalog().find_by_id(id) {
        Ok(book) => output.print_book(book),
        Err(e @ ReadifyError::NotFound(_)) => output.message(&e.to_string()),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
