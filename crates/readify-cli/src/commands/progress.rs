//! Progress tracker command handlers

use anyhow::Result;

use readify_core::{KeyValueStore, ProgressForm, ProgressRecord, ProgressReport, Store};

use super::inline_invalid;
use crate::output::{Output, OutputFormat};

/// Calculate progress without saving it
pub fn calc(form: &ProgressForm, output: &Output) -> Result<()> {
    let Some(record) = inline_invalid(form.to_record(), output)? else {
        return Ok(());
    };
    print_report(&record, &record.report()?, output);
    Ok(())
}

/// Validate and save progress to the single tracker slot
pub fn save<S: KeyValueStore>(
    store: &mut Store<S>,
    form: &ProgressForm,
    output: &Output,
) -> Result<()> {
    let Some(record) = inline_invalid(store.save_progress(form), output)? else {
        return Ok(());
    };
    let report = record.report()?;

    print_report(&record, &report, output);
    output.success("Progress saved.");
    Ok(())
}

/// Show the saved progress, if any
pub fn show<S: KeyValueStore>(store: &Store<S>, output: &Output) -> Result<()> {
    let Some(record) = store.saved_progress()? else {
        output.message("Nothing saved yet.");
        return Ok(());
    };

    match output.format {
        OutputFormat::Json => output.json(&record),
        OutputFormat::Quiet => println!("{}", record.pct.round()),
        OutputFormat::Human => println!("{}", record.summary()),
    }
    Ok(())
}

fn print_report(record: &ProgressRecord, report: &ProgressReport, output: &Output) {
    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "total": record.total,
                    "read": record.read,
                    "perDay": record.per_day,
                    "pct": report.pct,
                    "daysRemaining": report.days_remaining,
                    "finished": report.is_finished()
                })
            );
        }
        OutputFormat::Quiet => println!("{}", report.days_remaining),
        OutputFormat::Human => {
            println!("Progress:       {}", report.percent_label());
            println!("Time to finish: {}", report.finish_label());
        }
    }
}
