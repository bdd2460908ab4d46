use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use journal_core::service::{IdAssignment, ServiceConfig};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default)]
    pub backend: Backend,
    pub local_dir: Option<String>,
    pub remote_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub address: Option<SocketAddr>,
    pub database_path: Option<String>,
    pub id_assignment: Option<IdAssignment>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    Local,
    Remote,
}

impl ServerSection {
    /// Service settings with config values layered over the defaults.
    pub fn service_config(&self) -> anyhow::Result<ServiceConfig> {
        let database_path = match self.database_path {
            Some(ref path) => PathBuf::from(path),
            None => default_database_path()?,
        };
        let mut config = ServiceConfig::default().with_database_path(database_path);
        if let Some(address) = self.address {
            config = config.with_address(address);
        }
        if let Some(id_assignment) = self.id_assignment {
            config = config.with_id_assignment(id_assignment);
        }
        Ok(config)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn default_database_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("journal.db"))
}

/// Read the config file, or defaults when it does not exist.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<JournalConfig> {
    if !path.exists() {
        return Ok(JournalConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<JournalConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("journal"));
        }
    }
    Ok(home_dir()?.join(".config").join("journal"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("journal"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("journal"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
