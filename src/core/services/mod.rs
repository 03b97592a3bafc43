//! List engine and command dispatch
//!
//! - [`task_list`] - Ordered task list with date and keyword queries
//! - [`contact_list`] - Contact map keyed by normalized name
//! - [`assistant`] - Runs one input line against both lists

pub mod assistant;
pub mod contact_list;
pub mod task_list;

pub use assistant::{Assistant, Reply, ReplyKind};
pub use contact_list::ContactList;
pub use task_list::TaskList;

use crate::core::error::JaxError;

/// What a list operation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Response text
    pub message: String,
    /// Set when the change was applied but could not be saved
    pub warning: Option<JaxError>,
    /// Whether the operation wrote to the store
    pub saved: bool,
}

impl Outcome {
    /// A change that was followed by a save attempt
    #[must_use]
    pub const fn saved(message: String, warning: Option<JaxError>) -> Self {
        Self {
            message,
            warning,
            saved: true,
        }
    }

    /// A no-op that left the store alone
    #[must_use]
    pub const fn unsaved(message: String) -> Self {
        Self {
            message,
            warning: None,
            saved: false,
        }
    }
}
