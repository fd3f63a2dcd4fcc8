//! Parsing helper functions for the CLI.
//!
//! Everything here runs before the ledger is touched: a value that fails
//! these checks never reaches `shelf_core`.

mod parsing;

// Re-export public API
pub use parsing::{parse_book_id, require_text, validate_format};
