//! Reading list and completed-books command handlers

use anyhow::{Context, Result};

use readify_core::{KeyValueStore, Store};

use crate::output::{Output, OutputFormat};

/// Show the saved reading list
pub fn reading_list<S: KeyValueStore>(store: &Store<S>, output: &Output) -> Result<()> {
    let entries = store.reading_list().context("Failed to load reading list")?;
    output.print_reading_list(&entries);
    Ok(())
}

/// Record a finished book title
pub fn add_completed<S: KeyValueStore>(
    store: &mut Store<S>,
    title: &str,
    output: &Output,
) -> Result<()> {
    if store.add_completed(title)? {
        output.success(&format!("Marked as completed: {}", title.trim()));
    } else {
        output.message("Nothing to add.");
    }
    Ok(())
}

/// List finished titles in the order they were added
pub fn list_completed<S: KeyValueStore>(store: &Store<S>, output: &Output) -> Result<()> {
    let titles = store.completed_books()?;

    match output.format {
        OutputFormat::Json => output.json(&titles),
        OutputFormat::Quiet => {
            for title in &titles {
                println!("{}", title);
            }
        }
        OutputFormat::Human => {
            if titles.is_empty() {
                println!("No completed books yet.");
                return Ok(());
            }
            for title in &titles {
                println!("  {}", title);
            }
            println!("\n{} completed", titles.len());
        }
    }
    Ok(())
}

/// Forget every finished title
pub fn clear_completed<S: KeyValueStore>(store: &mut Store<S>, output: &Output) -> Result<()> {
    store
        .clear_completed()
        .context("Failed to clear completed books")?;
    output.success("Completed list cleared.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_store;

    #[test]
    fn test_completed_lifecycle() {
        let mut store = memory_store();
        let output = Output::new(OutputFormat::Quiet);

        add_completed(&mut store, "  Dune ", &output).unwrap();
        add_completed(&mut store, "   ", &output).unwrap();
        assert_eq!(store.completed_books().unwrap(), vec!["Dune"]);

        clear_completed(&mut store, &output).unwrap();
        assert!(store.completed_books().unwrap().is_empty());
        assert!(list_completed(&store, &output).is_ok());
    }
}
