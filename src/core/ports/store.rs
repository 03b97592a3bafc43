//! Record store port
//!
//! Defines the interface for loading and saving the task and contact
//! collections.

use crate::core::models::{ContactMap, Task};

/// Which collection a store operation concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// The ordered task list
    Tasks,
    /// The contact map
    Contacts,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tasks => write!(f, "tasks"),
            Self::Contacts => write!(f, "contacts"),
        }
    }
}

/// Persistence backend for tasks and contacts
///
/// Every save replaces the whole collection. Loading from a store that has
/// never been written returns an empty collection, not an error. Whatever
/// is saved must load back with the same tasks in the same order, the same
/// done flags, and the same contact keys.
pub trait RecordStore {
    /// Load the task list
    fn load_tasks(&self) -> anyhow::Result<Vec<Task>>;

    /// Replace the stored task list
    fn save_tasks(&self, tasks: &[Task]) -> anyhow::Result<()>;

    /// Load the contact map
    fn load_contacts(&self) -> anyhow::Result<ContactMap>;

    /// Replace the stored contact map
    fn save_contacts(&self, contacts: &ContactMap) -> anyhow::Result<()>;
}
