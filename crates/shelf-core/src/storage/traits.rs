//! Store trait definition.
//!
//! `LedgerStore` is the load/save boundary between the in-memory ledger and
//! durable storage. The ledger owns exactly one store and calls `save` after
//! every mutation.

use super::types::LedgerState;
use crate::error::Result;

/// Persistence interface for ledger state.
///
/// All implementations must ensure:
/// - `save` replaces the stored document in full
/// - `load` after a successful `save` returns an equal state
/// - An absent document loads as an empty state
pub trait LedgerStore {
    /// Load the full ledger state.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Corrupt` if the stored document cannot be parsed
    /// or breaks the ledger invariants, and `LedgerError::Storage` if it
    /// cannot be read.
    fn load(&self) -> Result<LedgerState>;

    /// Persist the full ledger state, overwriting what was stored before.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the document cannot be written.
    fn save(&mut self, state: &LedgerState) -> Result<()>;

    /// Human-readable description of where state lives.
    fn location(&self) -> String;
}
