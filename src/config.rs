//! Global configuration management
//!
//! User preferences are stored at `~/.jax/config.toml`. Every field has a
//! default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global jax configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JaxConfig {
    /// Where records are kept
    #[serde(default)]
    pub storage: StorageConfig,
    /// Terminal presentation
    #[serde(default)]
    pub ui: UiConfig,
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory (defaults to `~/.jax/data`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Task file name inside the data directory
    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,
    /// Contact file name inside the data directory
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,
}

fn default_tasks_file() -> String {
    paths::TASKS_FILE.to_string()
}

fn default_contacts_file() -> String {
    paths::CONTACTS_FILE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            tasks_file: default_tasks_file(),
            contacts_file: default_contacts_file(),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Spaces before each response line
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Colour errors and warnings
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_indent() -> usize {
    4
}

const fn default_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            color: default_color(),
        }
    }
}

impl JaxConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, or defaults if absent
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if absent or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| toml::from_str(&content).map_err(anyhow::Error::from))
        {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring unreadable config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the data directory: explicit override, then config, then default
    #[must_use]
    pub fn data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.storage.data_dir.clone())
            .unwrap_or_else(paths::default_data_dir)
    }
}
