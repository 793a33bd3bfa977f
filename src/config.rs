//! Configuration
//!
//! Read from a TOML file, by default `<config_dir>/taskgate/config.toml`.
//! Every key is optional; unknown keys are rejected.
//!
//! ```toml
//! location_prefix = "/api/task"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [store]
//! backend = "file"
//! path = "/var/lib/taskgate/tasks.json"
//!
//! [validation]
//! max_task_length = 280
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::{FileTaskStore, MemoryTaskStore};
use crate::api::{DEFAULT_LOCATION_PREFIX, Dispatcher};
use crate::core::ports::TaskStore;
use crate::core::services::Validator;
use crate::paths;

/// Failure to load configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid configuration
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Prefix of the `Location` header on create and update
    #[serde(default = "default_location_prefix")]
    pub location_prefix: String,
    /// Local server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Task store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Request validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

fn default_location_prefix() -> String {
    DEFAULT_LOCATION_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location_prefix: default_location_prefix(),
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

/// Local server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string to bind to
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which task store to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process memory; contents are lost on exit
    #[default]
    Memory,
    /// JSON file on disk
    File,
}

/// Task store settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store backend
    #[serde(default)]
    pub backend: StoreBackend,
    /// File path for the `file` backend (defaults to the data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Path used by the file backend
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(paths::default_tasks_file)
    }
}

/// Request validation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Longest accepted task text, in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_task_length: Option<usize>,
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one the default
    /// path is tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_file(&path)
                } else {
                    log::debug!("No config at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the validator described by this configuration
    #[must_use]
    pub fn validator(&self) -> Validator {
        match self.validation.max_task_length {
            Some(max) => Validator::new().with_max_task_length(max),
            None => Validator::new(),
        }
    }

    /// Open the configured task store
    #[must_use]
    pub fn open_store(&self) -> Arc<dyn TaskStore> {
        match self.store.backend {
            StoreBackend::Memory => Arc::new(MemoryTaskStore::new()),
            StoreBackend::File => Arc::new(FileTaskStore::new(self.store.file_path())),
        }
    }

    /// Build a dispatcher from this configuration
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.open_store(), self.validator())
            .with_location_prefix(self.location_prefix.clone())
    }
}
