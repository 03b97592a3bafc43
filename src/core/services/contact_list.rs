//! Contact list engine
//!
//! Contacts are keyed by normalized name. Adding a contact whose name is
//! already present replaces the old entry outright.

use std::fmt::Write as _;
use std::rc::Rc;

use super::Outcome;
use crate::core::error::JaxError;
use crate::core::models::{Contact, ContactMap, normalize_name};
use crate::core::ports::{Collection, RecordStore};

/// The contact map, bound to the store it saves into
pub struct ContactList {
    contacts: ContactMap,
    store: Rc<dyn RecordStore>,
}

impl std::fmt::Debug for ContactList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactList").field("contacts", &self.contacts).finish_non_exhaustive()
    }
}

impl ContactList {
    /// Start from an empty map
    #[must_use]
    pub fn new(store: Rc<dyn RecordStore>) -> Self {
        Self::with_contacts(ContactMap::new(), store)
    }

    /// Start from existing contacts
    #[must_use]
    pub fn with_contacts(contacts: ContactMap, store: Rc<dyn RecordStore>) -> Self {
        Self { contacts, store }
    }

    /// Load from the store, falling back to an empty map if it cannot be read
    #[must_use]
    pub fn load(store: Rc<dyn RecordStore>) -> Self {
        match store.load_contacts() {
            Ok(contacts) => {
                log::debug!("loaded {} contact(s)", contacts.len());
                Self::with_contacts(contacts, store)
            },
            Err(e) => {
                log::warn!("could not load contacts, starting empty: {e:#}");
                Self::new(store)
            },
        }
    }

    /// All contacts by key
    #[must_use]
    pub const fn contacts(&self) -> &ContactMap {
        &self.contacts
    }

    /// Look up a contact by name, ignoring case and padding
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(&normalize_name(name))
    }

    /// Number of contacts
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether there are no contacts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Write the whole map to the store
    pub fn persist(&self) -> Option<JaxError> {
        self.store.save_contacts(&self.contacts).err().map(|e| {
            log::warn!("failed to save {}: {e:#}", Collection::Contacts);
            JaxError::PersistenceWriteFailure(e.to_string())
        })
    }

    /// Add a contact, replacing any contact with the same normalized name
    pub fn insert(&mut self, contact: Contact) -> Outcome {
        let message = format!("Added: {contact}");
        if let Some(previous) = self.contacts.insert(contact.key(), contact) {
            log::debug!("replaced contact {}", previous.name);
        }
        let message = format!("{message}\nTotal contacts: {}", self.contacts.len());
        Outcome::saved(message, self.persist())
    }

    /// Remove a contact by name
    pub fn delete(&mut self, name: &str) -> Result<Outcome, JaxError> {
        let removed = self
            .contacts
            .remove(&normalize_name(name))
            .ok_or_else(|| JaxError::ContactNotFound(name.to_string()))?;
        Ok(Outcome::saved(format!("Noted. Removed: {removed}"), self.persist()))
    }

    /// Numbered listing of every contact
    #[must_use]
    pub fn list(&self) -> String {
        if self.contacts.is_empty() {
            return "Contact list is empty.".to_string();
        }
        let mut out = "Here are the contacts in your list:".to_string();
        for (i, contact) in self.contacts.values().enumerate() {
            let _ = write!(out, "\n{}. {contact}", i + 1);
        }
        out
    }
}
