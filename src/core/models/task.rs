//! Task model
//!
//! A task is a description plus a completion flag. What kind of task it is
//! (plain todo, deadline, or event) decides how it renders and which dates
//! it occurs on.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A task - something to be done
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs to be done
    pub description: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub done: bool,

    /// Variant-specific timing
    #[serde(flatten)]
    pub kind: TaskKind,
}

/// The three kinds of task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// No timing at all
    Todo,
    /// Must be done by `due`
    Deadline {
        /// Due date and time
        due: NaiveDateTime,
    },
    /// Spans `start` to `end`, both inclusive
    Event {
        /// Start date and time
        start: NaiveDateTime,
        /// End date and time
        end: NaiveDateTime,
    },
}

impl TaskKind {
    /// One-letter tag shown in listings
    #[must_use]
    pub const fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// Result of asking a task to change state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The flag flipped
    Changed,
    /// The task was already in the requested state
    Unchanged,
}

impl Task {
    /// Create a task that is not yet done
    #[must_use]
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    /// Create a todo
    #[must_use]
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    /// Create a deadline
    #[must_use]
    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { due })
    }

    /// Create an event; `start <= end` is not checked
    #[must_use]
    pub fn event(description: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Event { start, end })
    }

    /// Whether the task has been completed
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// `[X]` when done, `[ ]` otherwise
    #[must_use]
    pub const fn status_icon(&self) -> &'static str {
        if self.done { "[X]" } else { "[ ]" }
    }

    /// Mark as done
    pub fn mark(&mut self) -> Transition {
        if self.done {
            return Transition::Unchanged;
        }
        self.done = true;
        Transition::Changed
    }

    /// Mark as not done
    pub fn unmark(&mut self) -> Transition {
        if !self.done {
            return Transition::Unchanged;
        }
        self.done = false;
        Transition::Changed
    }

    /// Whether the task falls on `date`
    ///
    /// Deadlines occur on their due date. Events occur on every date from the
    /// start date to the end date inclusive. Todos never occur on a date.
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { due } => due.date() == date,
            TaskKind::Event { start, end } => start.date() <= date && date <= end.date(),
        }
    }

    /// Case-insensitive substring match on the description
    #[must_use]
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.description.to_lowercase().contains(&keyword.to_lowercase())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{} {}", self.kind.tag(), self.status_icon(), self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", timestamp::display(due)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                timestamp::display(start),
                timestamp::display(end)
            ),
        }
    }
}
