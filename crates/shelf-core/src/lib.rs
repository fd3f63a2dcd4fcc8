//! # Shelf Core
//!
//! Core library for Shelf - a single-user book collection with borrowing.
//!
//! This crate holds the ledger of books and loans and its persistence
//! contract, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **ledger**: The `Ledger` and its add/list/search/borrow/return operations
//! - **storage**: Store trait, JSON file backend, in-memory backend, data types
//! - **fs**: Whole-file replacement used by the JSON backend
//! - **error**: Error taxonomy shared with the CLI

pub mod error;
pub mod fs;
pub mod ledger;
pub mod storage;

pub use error::{LedgerError, NotBorrowed, Result, Unavailable};
pub use ledger::{Ledger, Stats};
pub use storage::{Book, BookId, BookStatus, JsonFileStore, LedgerState, LedgerStore, Loan};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
