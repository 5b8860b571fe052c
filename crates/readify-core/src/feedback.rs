//! Feedback form validation

use chrono::NaiveDateTime;

use crate::error::{ReadifyError, Result};
use crate::models::FeedbackEntry;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// Unvalidated feedback form fields
#[derive(Debug, Clone, Default)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate the trimmed fields and stamp them with `time`
    ///
    /// Fields are checked in form order; the first failure wins.
    pub fn into_entry(self, time: NaiveDateTime) -> Result<FeedbackEntry> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ReadifyError::invalid("Please enter your name."));
        }
        if name.chars().count() < MIN_NAME_CHARS {
            return Err(ReadifyError::invalid("Name must be at least 2 characters."));
        }
        if email.is_empty() {
            return Err(ReadifyError::invalid("Please enter your email address."));
        }
        if !is_valid_email(email) {
            return Err(ReadifyError::invalid(
                "Please enter a valid email address (e.g. user@example.com).",
            ));
        }
        if message.is_empty() {
            return Err(ReadifyError::invalid("Please enter your message."));
        }
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ReadifyError::invalid(
                "Message must be at least 10 characters.",
            ));
        }

        Ok(FeedbackEntry {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            time,
        })
    }
}

/// Loose address shape check: `local@domain.tld`, no whitespace, one `@`
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Needs a dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
