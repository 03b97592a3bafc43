//! User-facing error taxonomy
//!
//! Every failure a command can produce is one of these variants. The
//! `Display` output is exactly what the user sees as the command's reply.

use thiserror::Error;

/// Expected layout of a date-time argument
pub const TIMESTAMP_HINT: &str = "yyyy-MM-dd HHmm (e.g., 2019-10-15 1800)";

/// Expected layout of a date-only argument
pub const DATE_HINT: &str = "yyyy-MM-dd (e.g., 2019-10-15)";

/// Errors produced while parsing or executing a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JaxError {
    /// First word is not a known command
    #[error("Error - Invalid Input.")]
    UnknownCommand(String),

    /// Task description missing or blank (carries the task kind)
    #[error("Error - {0} description cannot be empty.")]
    EmptyDescription(&'static str),

    /// Deadline has no `/by` part
    #[error("Error - Deadline time not specified.")]
    MissingTime,

    /// Event has no `/from` part
    #[error("Error - Start time not specified.")]
    MissingStart,

    /// Event has no `/to` part
    #[error("Error - End time not specified.")]
    MissingEnd,

    /// Date or timestamp did not match the expected layout
    #[error("Error - Invalid Date Format. Please use: {0}")]
    InvalidDateFormat(&'static str),

    /// `mark`, `unmark` or `delete` without a number
    #[error("Error - Specify a task number.")]
    MissingIndex,

    /// Task number is not an integer
    #[error("Error - Invalid task number.")]
    InvalidIndex(String),

    /// Task number does not point into the list
    #[error("Error - Invalid task number. There are {len} tasks in the list.")]
    IndexOutOfRange {
        /// The rejected 0-based index
        index: i64,
        /// Length of the list at the time
        len: usize,
    },

    /// `remind` without a date
    #[error("Error - Please specify a date (yyyy-MM-dd).")]
    MissingDate,

    /// `find` without a keyword
    #[error("Error - Please specify a keyword to search for.")]
    MissingKeyword,

    /// `contact` without `/p` or `/e`
    #[error("Error - Missing /p or /e flags for contact details.")]
    MissingContactFields,

    /// One of name, phone or email is blank
    #[error("Error - Name, phone, and email cannot be empty.")]
    EmptyContactField,

    /// `delcontact` without a name
    #[error("Error - Please specify a contact name to delete.")]
    MissingName,

    /// No contact stored under that name
    #[error("Error - Contact not found.")]
    ContactNotFound(String),

    /// The store rejected a write; the in-memory change is kept
    #[error("Warning: Failed to save changes to file! ({0})")]
    PersistenceWriteFailure(String),
}

impl JaxError {
    /// Whether this error is a warning attached to an otherwise successful command
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::PersistenceWriteFailure(_))
    }
}
