//! Command handlers

pub mod books;
pub mod cache;
pub mod config;
pub mod feedback;
pub mod lists;
pub mod prefs;
pub mod progress;
pub mod recommend;
pub mod sounds;
pub mod status;
pub mod today;

use anyhow::Result;

use readify_core::ReadifyError;

use crate::output::Output;

/// Show invalid input as a message instead of failing the command
///
/// Returns `None` when the input was rejected.
pub fn inline_invalid<T>(result: readify_core::Result<T>, output: &Output) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e @ ReadifyError::InvalidInput(_)) => {
            output.message(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_inline_invalid() {
        let output = Output::new(OutputFormat::Quiet);

        assert_eq!(inline_invalid(Ok(3), &output).unwrap(), Some(3));

        let rejected: readify_core::Result<u32> =
            Err(ReadifyError::invalid("Please enter your name."));
        assert_eq!(inline_invalid(rejected, &output).unwrap(), None);

        let empty: readify_core::Result<u32> = Err(ReadifyError::Empty);
        assert!(inline_invalid(empty, &output).is_err());
    }
}
