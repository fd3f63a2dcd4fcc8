//! In-memory store, for tests and dry runs.

use crate::error::{LedgerError, Result};
use crate::storage::traits::LedgerStore;
use crate::storage::types::LedgerState;

/// Store that keeps the last saved state in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    state: LedgerState,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state, as if it had been loaded from disk.
    pub fn with_state(state: LedgerState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail with a storage error.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Last successfully saved state.
    pub fn saved(&self) -> &LedgerState {
        &self.state
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<LedgerState> {
        self.state.validate()?;
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &LedgerState) -> Result<()> {
        if self.fail_saves {
            return Err(LedgerError::Storage("save disabled".to_string()));
        }
        self.state = state.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
