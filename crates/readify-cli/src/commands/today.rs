//! Home page command handlers: streak, author of the day, quotes

use anyhow::Result;

use readify_core::daily::{author_of_day, QuoteRotation};
use readify_core::{KeyValueStore, Store};

use crate::output::{Output, OutputFormat};

/// Show the current visit streak
pub fn streak<S: KeyValueStore>(store: &Store<S>, output: &Output) -> Result<()> {
    let count = store.streak()?.map(|s| s.count).unwrap_or(0);

    match output.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "streak": count })),
        OutputFormat::Quiet => println!("{}", count),
        OutputFormat::Human => println!("🔥 {} day streak", count),
    }
    Ok(())
}

/// Show today's featured author and the first `quotes` quotes of the rotation
pub fn today<S: KeyValueStore>(store: &Store<S>, quotes: usize, output: &Output) -> Result<()> {
    let date = store.clock().today();
    let author = author_of_day(date);
    let quotes: Vec<_> = QuoteRotation::new().take(quotes).collect();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "date": date,
                    "author": author,
                    "quotes": quotes
                })
            );
        }
        OutputFormat::Quiet => println!("{}", author.name),
        OutputFormat::Human => {
            println!("Author of the day: {}", author.name);
            println!("  {}", author.description);
            for quote in quotes {
                println!();
                println!("\"{}\"", quote.text);
                println!("  - {}", quote.author);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_store;

    #[test]
    fn test_streak_before_and_after_visit() {
        let mut store = memory_store();
        let output = Output::new(OutputFormat::Quiet);

        assert!(streak(&store, &output).is_ok());
        store.touch_streak().unwrap();
        assert_eq!(store.streak().unwrap().map(|s| s.count), Some(1));
        assert!(today(&store, 7, &output).is_ok());
    }
}
