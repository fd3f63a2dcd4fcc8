//! Storage layer for shelf.
//!
//! This module provides the persistence boundary for the ledger:
//! - `LedgerStore` trait (load/save of the full state)
//! - `JsonFileStore`, the flat JSON file backend
//! - `MemoryStore`, an in-memory backend for tests
//! - Data types shared by the ledger and its stores

pub mod json_file;
pub mod memory;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::LedgerStore;
pub use types::{Book, BookId, BookStatus, LedgerState, Loan};
