//! Contact model

use std::fmt;

use serde::{Deserialize, Serialize};

/// A person with a phone number and an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name, as typed
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
}

impl Contact {
    /// Create a contact
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Key this contact is stored under
    #[must_use]
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Contacts are keyed by trimmed, lowercased name
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.phone, self.email)
    }
}
