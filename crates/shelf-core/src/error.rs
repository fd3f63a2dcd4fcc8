//! Error types for shelf core operations.
//!
//! Ledger operations report their outcome as a `Result`; nothing in the core
//! panics on bad input. The CLI layer maps these to exit codes and
//! user-facing messages.

use std::fmt;

use thiserror::Error;

use crate::storage::BookId;

/// Result type alias for shelf operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Why a borrow request could not be satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// The book exists but is currently on loan.
    OnLoan { borrower: String },
    /// No book with this id has ever been added.
    Unknown,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::OnLoan { borrower } => write!(f, "already borrowed by {}", borrower),
            Unavailable::Unknown => write!(f, "no such book"),
        }
    }
}

/// Why a return request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotBorrowed {
    /// There is no active loan for this id.
    NoActiveLoan,
    /// The loan is held by someone else.
    HeldByAnother,
}

impl fmt::Display for NotBorrowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotBorrowed::NoActiveLoan => write!(f, "no active loan"),
            NotBorrowed::HeldByAnother => write!(f, "loan is held by another borrower"),
        }
    }
}

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Borrow requested for an id not in the available set
    #[error("Book {id} is not available ({reason})")]
    BookNotAvailable { id: BookId, reason: Unavailable },

    /// Return requested for an id with no loan held by this borrower
    #[error("Book {id} was not borrowed by {borrower} ({reason})")]
    NotBorrowedByUser {
        id: BookId,
        borrower: String,
        reason: NotBorrowed,
    },

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted document could not be understood
    #[error("Corrupt data file: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            LedgerError::Storage(err.to_string())
        } else {
            LedgerError::Corrupt(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_available_message_names_borrower() {
        let err = LedgerError::BookNotAvailable {
            id: 3,
            reason: Unavailable::OnLoan {
                borrower: "Alice".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Book 3 is not available (already borrowed by Alice)"
        );
    }

    #[test]
    fn test_json_syntax_error_is_corrupt() {
        let err: LedgerError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, LedgerError::Corrupt(_)));
    }
}
