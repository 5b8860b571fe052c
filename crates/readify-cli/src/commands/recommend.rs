//! Recommend command handler

use anyhow::{Context, Result};
use rand::Rng;

use readify_core::{Genre, KeyValueStore, Length, ReadifyError, Recommender, Selection, Store};

use crate::output::Output;

/// Pick a random book for the selected genre and length
///
/// With `save`, the pick is added to the reading list.
pub fn recommend<S: KeyValueStore, R: Rng>(
    store: &mut Store<S>,
    recommender: &mut Recommender<R>,
    genre: Selection<Genre>,
    length: Selection<Length>,
    save: bool,
    output: &Output,
) -> Result<()> {
    match recommender.pick(store.catalog(), genre, length) {
        Ok(book) => output.print_book(book),
        Err(ReadifyError::Empty) => output.no_matches(),
        Err(e) => return Err(e.into()),
    }

    if save {
        save_current(store, recommender, output)?;
    }
    Ok(())
}

fn save_current<S: KeyValueStore, R: Rng>(
    store: &mut Store<S>,
    recommender: &Recommender<R>,
    output: &Output,
) -> Result<()> {
    let id = match recommender.current_book(store.catalog()) {
        Ok(book) => book.id,
        Err(e @ ReadifyError::NoSelection) => {
            output.message(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let added = store
        .save_id_to_reading_list(id)
        .context("Failed to save to reading list")?;
    if added {
        output.success("Saved to your reading list.");
    } else {
        output.message("Already in your reading list.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::test_support::memory_store;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_recommend_and_save() {
        let mut store = memory_store();
        let mut rec = Recommender::new(StdRng::seed_from_u64(7));
        let output = Output::new(OutputFormat::Quiet);

        recommend(
            &mut store,
            &mut rec,
            Selection::Only(Genre::Manga),
            Selection::Only(Length::Short),
            true,
            &output,
        )
        .unwrap();

        let list = store.reading_list().unwrap();
        assert_eq!(list.len(), 1);
        assert!(list[0].id == 7 || list[0].id == 19);
        assert_eq!(Some(list[0].id), rec.current());
    }

    #[test]
    fn test_empty_pick_saves_nothing() {
        let mut store = memory_store();
        let mut rec = Recommender::new(StdRng::seed_from_u64(7));
        let output = Output::new(OutputFormat::Quiet);

        recommend(
            &mut store,
            &mut rec,
            Selection::Only(Genre::Romance),
            Selection::Only(Length::Short),
            true,
            &output,
        )
        .unwrap();

        assert!(store.reading_list().unwrap().is_empty());
    }
}
