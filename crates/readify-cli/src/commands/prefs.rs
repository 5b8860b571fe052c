//! Preference command handlers (theme, newsletter)

use anyhow::{Context, Result};

use readify_core::{KeyValueStore, Store};

use super::inline_invalid;
use crate::output::{Output, OutputFormat};

fn theme_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}

/// Show the current theme
pub fn show_theme<S: KeyValueStore>(store: &Store<S>, output: &Output) -> Result<()> {
    let dark = store.dark_mode()?;
    match output.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "dark_mode": dark })),
        _ => println!("{}", theme_name(dark)),
    }
    Ok(())
}

/// Flip between light and dark
pub fn toggle_theme<S: KeyValueStore>(store: &mut Store<S>, output: &Output) -> Result<()> {
    let dark = store
        .toggle_dark_mode()
        .context("Failed to save theme")?;
    output.success(&format!("Theme set to {}", theme_name(dark)));
    Ok(())
}

/// Set an explicit theme
pub fn set_theme<S: KeyValueStore>(store: &mut Store<S>, dark: bool, output: &Output) -> Result<()> {
    store
        .set_dark_mode(dark)
        .context("Failed to save theme")?;
    output.success(&format!("Theme set to {}", theme_name(dark)));
    Ok(())
}

/// Store the newsletter address
pub fn subscribe<S: KeyValueStore>(
    store: &mut Store<S>,
    email: &str,
    output: &Output,
) -> Result<()> {
    if inline_invalid(store.subscribe_newsletter(email), output)?.is_none() {
        return Ok(());
    }
    output.success(&format!("Subscribed {}", email.trim()));
    Ok(())
}
