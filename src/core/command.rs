//! Command grammar
//!
//! Splits a raw line into its command word and the untouched remainder, and
//! classifies the command word against the fixed command set.

use std::fmt;
use std::str::FromStr;

use crate::core::error::JaxError;

/// Every command the assistant understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the session
    Bye,
    /// Show all tasks
    List,
    /// Mark a task as done
    Mark,
    /// Mark a task as not done
    Unmark,
    /// Remove a task
    Delete,
    /// Add a todo
    Todo,
    /// Add a deadline
    Deadline,
    /// Add an event
    Event,
    /// Show tasks occurring on a date
    Remind,
    /// Search task descriptions
    Find,
    /// Add or replace a contact
    Contact,
    /// Show all contacts
    Contacts,
    /// Remove a contact
    DeleteContact,
    /// Show the command reference
    Help,
    /// Clear the display
    Clear,
    /// Show the greeting
    Hello,
}

impl Command {
    /// All commands, in help order
    pub const ALL: [Self; 16] = [
        Self::Todo,
        Self::Deadline,
        Self::Event,
        Self::List,
        Self::Mark,
        Self::Unmark,
        Self::Delete,
        Self::Find,
        Self::Remind,
        Self::Clear,
        Self::Contact,
        Self::DeleteContact,
        Self::Contacts,
        Self::Help,
        Self::Hello,
        Self::Bye,
    ];

    /// The word typed to invoke this command
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Bye => "bye",
            Self::List => "list",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Delete => "delete",
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Remind => "remind",
            Self::Find => "find",
            Self::Contact => "contact",
            Self::Contacts => "contacts",
            Self::DeleteContact => "delcontact",
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Hello => "hello",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Command {
    type Err = JaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        match lowered.as_str() {
            // accept the enum-style spelling too
            "delete_contact" => Ok(Self::DeleteContact),
            word => Self::ALL
                .into_iter()
                .find(|c| c.keyword() == word)
                .ok_or_else(|| JaxError::UnknownCommand(s.to_string())),
        }
    }
}

/// Split a line into `(command word, remainder)` at the first space
#[must_use]
pub fn split_command(line: &str) -> (&str, Option<&str>) {
    match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    }
}

/// Classify a raw line
pub fn parse_command(line: &str) -> Result<(Command, Option<&str>), JaxError> {
    let (word, rest) = split_command(line);
    Ok((word.parse()?, rest))
}
