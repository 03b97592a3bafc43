//! Domain models for jax
//!
//! - Task: "What needs to be done" (todo, deadline or event)
//! - Contact: "Who to reach" (keyed by normalized name)

pub mod contact;
pub mod task;
pub mod timestamp;

pub use contact::{Contact, normalize_name};
pub use task::{Task, TaskKind, Transition};

/// Contacts keyed by normalized name
pub type ContactMap = std::collections::BTreeMap<String, Contact>;
