//! Centralized path definitions for jax
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.jax/
//! ├── config.toml          # User preferences (optional)
//! └── data/                # Default data directory
//!     ├── tasks.json
//!     └── contacts.json
//! ```
//!
//! The data directory can be moved with `storage.data_dir` in the config
//! file or the `--data-dir` flag.

use std::path::PathBuf;

/// Global directory name
const GLOBAL_DIR: &str = ".jax";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default data subdirectory
const DATA_DIR: &str = "data";

/// Default task file name
pub const TASKS_FILE: &str = "tasks.json";

/// Default contact file name
pub const CONTACTS_FILE: &str = "contacts.json";

/// Get the global jax directory.
///
/// Returns `~/.jax/`.
#[must_use]
pub fn global_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.jax/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default data directory.
///
/// Returns `~/.jax/data/`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    global_dir().join(DATA_DIR)
}
