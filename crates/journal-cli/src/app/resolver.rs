//! Path resolution for the config file.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::default_config_path;

/// Resolve the config file path, preferring `--config` / `JOURNAL_CONFIG`.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(ref value) = cli.config {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}
