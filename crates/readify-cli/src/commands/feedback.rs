//! Feedback command handlers

use anyhow::Result;

use readify_core::{FeedbackDraft, KeyValueStore, Store};

use super::inline_invalid;
use crate::output::{Output, OutputFormat};

/// Validate and store a feedback message
pub fn submit<S: KeyValueStore>(
    store: &mut Store<S>,
    draft: FeedbackDraft,
    output: &Output,
) -> Result<()> {
    let Some(entry) = inline_invalid(store.submit_feedback(draft), output)? else {
        return Ok(());
    };
    output.success(&format!("Thanks, {}! Your feedback was saved.", entry.name));
    Ok(())
}

/// List stored feedback, oldest first
pub fn list<S: KeyValueStore>(store: &Store<S>, output: &Output) -> Result<()> {
    let entries = store.feedback()?;

    match output.format {
        OutputFormat::Json => output.json(&entries),
        OutputFormat::Quiet => {
            for entry in &entries {
                println!("{}", entry.email);
            }
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("No feedback yet.");
                return Ok(());
            }
            for entry in &entries {
                println!("────────────────────────────────────────");
                println!(
                    "{} <{}>  {}",
                    entry.name,
                    entry.email,
                    entry.time.format("%Y-%m-%d %H:%M")
                );
                println!();
                println!("{}", entry.message);
                println!();
            }
            println!("{} message(s)", entries.len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_store;

    #[test]
    fn test_submit_validates() {
        let mut store = memory_store();
        let output = Output::new(OutputFormat::Quiet);

        submit(
            &mut store,
            FeedbackDraft::new("Ada", "not-an-email", "Hello there, lovely site"),
            &output,
        )
        .unwrap();
        assert!(store.feedback().unwrap().is_empty());

        submit(
            &mut store,
            FeedbackDraft::new("Ada", "ada@example.com", "Hello there, lovely site"),
            &output,
        )
        .unwrap();
        assert_eq!(store.feedback().unwrap().len(), 1);
    }
}
