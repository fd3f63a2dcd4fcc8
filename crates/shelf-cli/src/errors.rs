//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI. Ledger errors from
//! `shelf_core` are mapped here too.

use std::fmt;

use shelf_core::LedgerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (book id)
    NotFound { message: String, hint: String },

    /// Book id text is not a positive integer
    InvalidIdentifierFormat(String),

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidIdentifierFormat(raw) => {
                write!(f, "Invalid ID \"{}\". Please enter a number.", raw)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidIdentifierFormat error from the offending text.
    pub fn invalid_identifier_format(raw: impl Into<String>) -> Self {
        CliError::InvalidIdentifierFormat(raw.into())
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidIdentifierFormat(_) | CliError::InvalidInput(_) => {
                exit_codes::INVALID_INPUT
            }
        }
    }
}

/// Exit code for a ledger error.
pub fn ledger_exit_code(err: &LedgerError) -> i32 {
    match err {
        LedgerError::BookNotAvailable { .. } => exit_codes::NOT_AVAILABLE,
        LedgerError::NotBorrowedByUser { .. } => exit_codes::NOT_BORROWED,
        LedgerError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        LedgerError::Corrupt(_) => exit_codes::CORRUPT_DATA,
        LedgerError::Storage(_) => 1,
    }
}

/// Exit code for any error returned by a command handler.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(ledger_err) = err.downcast_ref::<LedgerError>() {
        return ledger_exit_code(ledger_err);
    }
    1
}

/// Contextual hint for a handler error, if one applies.
pub fn error_hint(err: &anyhow::Error) -> Option<&str> {
    if let Some(ledger_err) = err.downcast_ref::<LedgerError>() {
        return match ledger_err {
            LedgerError::BookNotAvailable { .. } => {
                Some("Run `shelf list` to see books on the shelf.")
            }
            LedgerError::NotBorrowedByUser { .. } => {
                Some("Run `shelf loans` to see who holds each book.")
            }
            LedgerError::Corrupt(_) => {
                Some("Fix or move the data file aside; it was left untouched.")
            }
            _ => None,
        };
    }
    match err.downcast_ref::<CliError>() {
        Some(CliError::NotFound { hint, .. }) => Some(hint.as_str()),
        Some(CliError::InvalidIdentifierFormat(_)) => {
            Some("Book IDs are positive whole numbers.")
        }
        _ => None,
    }
}
