//! Status command handler

use anyhow::Result;

use readify_core::{Config, Store};

use crate::output::{Output, OutputFormat};

/// Show storage location and a summary of saved state
pub fn show(store: &Store, config: &Config, output: &Output) -> Result<()> {
    let reading_list = store.reading_list()?.len();
    let completed = store.completed_books()?.len();
    let feedback = store.feedback()?.len();
    let streak = store.streak()?.map(|s| s.count).unwrap_or(0);
    let dark_mode = store.dark_mode()?;
    let newsletter = store.newsletter_email()?;
    let size = store.file_size();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "store_path": config.store_path(),
                    "store_size": size,
                    "catalog": store.catalog().len(),
                    "streak": streak,
                    "dark_mode": dark_mode,
                    "newsletter": newsletter,
                    "counts": {
                        "reading_list": reading_list,
                        "completed": completed,
                        "feedback": feedback
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.store_path().display());
        }
        OutputFormat::Human => {
            println!("Readify Status");
            println!("==============");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.store_path().display());
            println!("  Size:     {}", human_size(size));
            println!();
            println!("Preferences:");
            println!("  Theme:      {}", if dark_mode { "dark" } else { "light" });
            println!(
                "  Newsletter: {}",
                newsletter.as_deref().unwrap_or("(not subscribed)")
            );
            println!();
            println!("Contents:");
            println!("  Catalog:      {} book(s)", store.catalog().len());
            println!("  Reading list: {}", reading_list);
            println!("  Completed:    {}", completed);
            println!("  Feedback:     {}", feedback);
            println!("  Streak:       {} day(s)", streak);
        }
    }

    Ok(())
}

fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 bytes");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MB");
    }
}
