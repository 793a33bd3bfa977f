//! Default filesystem locations
//!
//! ```text
//! <config_dir>/taskgate/
//! └── config.toml               # Server, store and validation settings
//!
//! <data_dir>/taskgate/
//! └── tasks.json                # File store contents
//! ```
//!
//! `<config_dir>` and `<data_dir>` follow the platform conventions from
//! `dirs` and fall back to the current directory when unknown.

use std::path::PathBuf;

/// Application directory name
const APP_DIR: &str = "taskgate";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// File store filename
const TASKS_FILE: &str = "tasks.json";

/// Get the user-level config directory
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the default config file path
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Get the default file store path
#[must_use]
pub fn default_tasks_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(TASKS_FILE)
}
