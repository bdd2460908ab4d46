//! Application context for the Journal CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file and decides
//! which storage backend the entry commands talk to.

use std::path::PathBuf;

use log::debug;
use once_cell::unsync::OnceCell;

use journal_core::remote::RemoteStore;
use journal_core::storage::{FileSlot, LocalStore};
use journal_core::EntryStore;

use crate::cli::Cli;
use crate::config::{default_data_dir, read_config_or_default, Backend, JournalConfig};

use super::resolver::resolve_config_path;

/// Where entries live for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendChoice {
    /// Local slot directory
    Local(PathBuf),
    /// Base URL of the entry service
    Remote(String),
}

/// Application context that bundles CLI args with the config file.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<JournalConfig>,
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

    /// Get the config file contents, loading them lazily if needed.
    pub fn config(&self) -> anyhow::Result<&JournalConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli)?;
            debug!("Loading config from {}", path.display());
            read_config_or_default(&path)
        })
    }

    /// Pick the backend: flags first, then the config file, then local defaults.
    pub fn backend(&self) -> anyhow::Result<BackendChoice> {
        if let Some(ref url) = self.cli.remote {
            return Ok(BackendChoice::Remote(url.clone()));
        }
        if let Some(ref dir) = self.cli.data_dir {
            return Ok(BackendChoice::Local(PathBuf::from(dir)));
        }

        let storage = &self.config()?.storage;
        match storage.backend {
            Backend::Remote => {
                let url = storage.remote_url.clone().ok_or_else(|| {
                    anyhow::anyhow!(
                        "Config selects the remote backend but sets no remote_url.\n\nHint: Set [storage] remote_url or pass --remote."
                    )
                })?;
                Ok(BackendChoice::Remote(url))
            }
            Backend::Local => match storage.local_dir {
                Some(ref dir) => Ok(BackendChoice::Local(PathBuf::from(dir))),
                None => Ok(BackendChoice::Local(default_data_dir()?)),
            },
        }
    }

    /// Open the selected entry store.
    pub fn open_store(&self) -> anyhow::Result<Box<dyn EntryStore>> {
        match self.backend()? {
            BackendChoice::Local(dir) => {
                debug!("Using local storage in {}", dir.display());
                Ok(Box::new(LocalStore::new(FileSlot::new(dir))))
            }
            BackendChoice::Remote(url) => {
                debug!("Using entry service at {}", url);
                Ok(Box::new(RemoteStore::connect(url)?))
            }
        }
    }
}
