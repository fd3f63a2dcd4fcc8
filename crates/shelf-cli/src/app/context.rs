//! Application context for the Shelf CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use shelf_core::{JsonFileStore, Ledger};

use crate::cli::Cli;
use crate::config::ShelfConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_data_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ShelfConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&ShelfConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Display name of the library.
    pub fn library_name(&self) -> anyhow::Result<&str> {
        Ok(self.config()?.library.name.as_str())
    }

    /// Path of the data file for this invocation.
    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        resolve_data_path(self.cli, self.config()?)
    }

    /// Create a UI context from the global flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Load the ledger from the resolved data file.
    pub fn open_ledger(&self) -> anyhow::Result<Ledger<JsonFileStore>> {
        let path = self.data_path()?;
        if !path.exists() {
            log::info!(
                "starting a new library; {} will be created on the first change",
                path.display()
            );
        }
        let ledger = Ledger::open(JsonFileStore::new(path))?;
        Ok(ledger)
    }
}
