//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying books and loans
//! in JSON, table and plain text form.

mod json;
mod text;

// Re-export public API
pub use json::{book_json, books_json, loans_json};
pub use text::{loan_line, print_book_list, print_loan_list};
