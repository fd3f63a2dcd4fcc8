//! JSON file storage backend.
//!
//! The whole ledger lives in one pretty-printed JSON document which is
//! rewritten in full after every mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{LedgerError, Result};
use crate::storage::traits::LedgerStore;
use crate::storage::types::LedgerState;

const INDENT: &[u8] = b"    ";

/// Flat-file JSON store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a state into the canonical document bytes.
    ///
    /// Output is deterministic: the same state always yields the same bytes.
    pub fn encode(state: &LedgerState) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        state.serialize(&mut serializer)?;
        Ok(out)
    }

    /// Parse and validate document bytes.
    pub fn decode(bytes: &[u8]) -> Result<LedgerState> {
        let state: LedgerState = serde_json::from_slice(bytes)?;
        state.validate()?;
        Ok(state)
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<LedgerState> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "no data file at {}, starting empty",
                    self.path.display()
                );
                return Ok(LedgerState::default());
            }
            Err(err) => {
                return Err(LedgerError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        let state = Self::decode(&bytes).map_err(|err| match err {
            LedgerError::Corrupt(msg) => {
                LedgerError::Corrupt(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })?;
        debug!(
            "loaded {} available and {} borrowed books from {}",
            state.books.len(),
            state.borrowed_books.len(),
            self.path.display()
        );
        Ok(state)
    }

    fn save(&mut self, state: &LedgerState) -> Result<()> {
        let document = Self::encode(state)?;
        crate::fs::replace_file(&self.path, &document).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!("wrote {} bytes to {}", document.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
