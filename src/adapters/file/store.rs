//! JSON file record store
//!
//! Each collection lives in its own pretty-printed JSON file inside the data
//! directory. A file that does not exist yet reads as an empty collection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::StorageConfig;
use crate::core::models::{Contact, ContactMap, Task};
use crate::core::ports::RecordStore;

/// On-disk layout version
const FORMAT_VERSION: u32 = 1;

/// Task file structure
#[derive(Debug, Serialize, Deserialize)]
struct TaskFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Contact file structure
///
/// Contacts are written as a list; keys are rebuilt from names on load.
#[derive(Debug, Serialize, Deserialize)]
struct ContactFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    contacts: Vec<Contact>,
}

const fn default_version() -> u32 {
    FORMAT_VERSION
}

/// Record store backed by two JSON files
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    tasks_path: PathBuf,
    contacts_path: PathBuf,
}

impl JsonFileStore {
    /// Store using explicit file paths
    #[must_use]
    pub const fn new(tasks_path: PathBuf, contacts_path: PathBuf) -> Self {
        Self {
            tasks_path,
            contacts_path,
        }
    }

    /// Store using the configured data directory and file names
    #[must_use]
    pub fn from_config(storage: &StorageConfig, data_dir: &Path) -> Self {
        Self::new(data_dir.join(&storage.tasks_file), data_dir.join(&storage.contacts_file))
    }

    /// Path of the task file
    #[must_use]
    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    /// Path of the contact file
    #[must_use]
    pub fn contacts_path(&self) -> &Path {
        &self.contacts_path
    }
}

/// Read and decode `path`, or `None` if it does not exist
fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(value))
}

/// Encode `value` and write it to `path`, creating parent directories
fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

impl RecordStore for JsonFileStore {
    fn load_tasks(&self) -> anyhow::Result<Vec<Task>> {
        Ok(read_json::<TaskFile>(&self.tasks_path)?.map(|f| f.tasks).unwrap_or_default())
    }

    fn save_tasks(&self, tasks: &[Task]) -> anyhow::Result<()> {
        let file = TaskFile {
            version: FORMAT_VERSION,
            tasks: tasks.to_vec(),
        };
        write_json(&self.tasks_path, &file)
    }

    fn load_contacts(&self) -> anyhow::Result<ContactMap> {
        let contacts = read_json::<ContactFile>(&self.contacts_path)?
            .map(|f| f.contacts)
            .unwrap_or_default();
        Ok(contacts.into_iter().map(|c| (c.key(), c)).collect())
    }

    fn save_contacts(&self, contacts: &ContactMap) -> anyhow::Result<()> {
        let file = ContactFile {
            version: FORMAT_VERSION,
            contacts: contacts.values().cloned().collect(),
        };
        write_json(&self.contacts_path, &file)
    }
}
