//! Error taxonomy for catalog queries and user-state operations
//!
//! None of these are fatal: callers show `InvalidInput` inline, turn
//! `Empty` into a "try a different filter" message and treat `NotFound`
//! as a no-op.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum ReadifyError {
    /// Out-of-range or non-numeric user input
    #[error("{0}")]
    InvalidInput(String),

    /// No candidates matched the requested filters
    #[error("No books match your selection.")]
    Empty,

    /// Unknown book id
    #[error("Book not found: {0}")]
    NotFound(u32),

    /// A save was requested before anything was picked
    #[error("Generate a recommendation first.")]
    NoSelection,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ReadifyError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ReadifyError::InvalidInput(message.into())
    }

    /// Whether this error came from user input rather than the backend
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, ReadifyError::Storage(_))
    }
}

pub type Result<T> = std::result::Result<T, ReadifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ReadifyError::invalid("Total pages must be > 0").to_string(),
            "Total pages must be > 0"
        );
        assert_eq!(ReadifyError::NotFound(42).to_string(), "Book not found: 42");
        assert_eq!(
            ReadifyError::Empty.to_string(),
            "No books match your selection."
        );
    }

    #[test]
    fn test_user_facing() {
        assert!(ReadifyError::Empty.is_user_facing());
        assert!(ReadifyError::NoSelection.is_user_facing());

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: ReadifyError = StorageError::Io(io).into();
        assert!(!err.is_user_facing());
    }
}
