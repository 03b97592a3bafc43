//! Command dispatch
//!
//! The [`Assistant`] owns both lists and turns one raw input line into one
//! [`Reply`]. Errors never escape: they become the reply text.

use std::rc::Rc;

use serde::Serialize;

use super::{ContactList, Outcome, TaskList};
use crate::core::error::JaxError;
use crate::core::parser::{self, Request};
use crate::core::ports::RecordStore;

/// Shown on start-up and for `hello`
pub const GREETING: &str = "Top of the morning to you! I'm Jax, your personal assistant chatbot!\n\
                            What can I do for you?";

/// Shown for `bye`
pub const FAREWELL: &str = "Aww shucks. Hope to see you again soon!";

/// Shown for `help`
pub const HELP: &str = "Here are the commands you can use:
1.  todo <description>
2.  deadline <desc> /by <yyyy-MM-dd HHmm>
3.  event <desc> /from <yyyy-MM-dd HHmm> /to <yyyy-MM-dd HHmm>
4.  list
5.  mark <index>
6.  unmark <index>
7.  delete <index>
8.  find <keyword>
9.  remind <yyyy-MM-dd>
10. clear
11. contact <name> /p <phone> /e <email>
12. delcontact <name>
13. contacts
14. hello
15. bye";

/// How the front end should treat a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// Show the message
    Message,
    /// Clear the display
    Clear,
    /// Show the message, then end the session
    Exit,
}

/// Response to one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// How to present this reply
    pub kind: ReplyKind,
    /// Whether the command succeeded
    pub success: bool,
    /// Response text (the error message when `success` is false)
    pub message: String,
    /// Problems that did not stop the command
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Reply {
    /// A plain successful message
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Message,
            success: true,
            message: message.into(),
            warnings: Vec::new(),
        }
    }

    /// A failed command
    #[must_use]
    pub fn error(error: &JaxError) -> Self {
        Self {
            kind: ReplyKind::Message,
            success: false,
            message: error.to_string(),
            warnings: Vec::new(),
        }
    }

    /// Attach a non-fatal warning
    #[must_use]
    pub fn with_warning(mut self, warning: Option<JaxError>) -> Self {
        self.warnings.extend(warning.map(|w| w.to_string()));
        self
    }

    /// The message followed by any warnings, one per line
    #[must_use]
    pub fn text(&self) -> String {
        std::iter::once(self.message.as_str())
            .chain(self.warnings.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Outcome> for Reply {
    fn from(outcome: Outcome) -> Self {
        Self::message(outcome.message).with_warning(outcome.warning)
    }
}

/// The command interpreter
#[derive(Debug)]
pub struct Assistant {
    tasks: TaskList,
    contacts: ContactList,
}

impl Assistant {
    /// Load both lists from `store`
    #[must_use]
    pub fn new(store: Rc<dyn RecordStore>) -> Self {
        Self::with_lists(TaskList::load(Rc::clone(&store)), ContactList::load(store))
    }

    /// Use lists that were built elsewhere
    #[must_use]
    pub const fn with_lists(tasks: TaskList, contacts: ContactList) -> Self {
        Self { tasks, contacts }
    }

    /// The task list
    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// The contact list
    #[must_use]
    pub const fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    /// Start-up greeting
    #[must_use]
    pub fn greeting() -> Reply {
        Reply::message(GREETING)
    }

    /// Run one input line
    pub fn respond(&mut self, line: &str) -> Reply {
        log::debug!("input: {line:?}");
        match parser::parse(line).and_then(|request| self.execute(request)) {
            Ok(reply) => reply,
            Err(e) => {
                log::debug!("command failed: {e:?}");
                Reply::error(&e)
            },
        }
    }

    /// Run a parsed request
    pub fn execute(&mut self, request: Request) -> Result<Reply, JaxError> {
        Ok(match request {
            Request::Hello => Self::greeting(),
            Request::Help => Reply::message(HELP),
            Request::Clear => Reply {
                kind: ReplyKind::Clear,
                ..Reply::message("")
            },
            Request::Bye => Reply {
                kind: ReplyKind::Exit,
                ..Reply::message(FAREWELL)
            },
            Request::List => Reply::message(self.tasks.list()),
            Request::Remind(date) => Reply::message(self.tasks.remind(date)),
            Request::Find(keyword) => Reply::message(self.tasks.find(&keyword)),
            Request::Add(task) => self.tasks.insert(task).into(),
            Request::Mark(index) => self.tasks.mark(index)?.into(),
            Request::Unmark(index) => self.tasks.unmark(index)?.into(),
            Request::Delete(index) => self.tasks.delete(index)?.into(),
            Request::Contacts => Reply::message(self.contacts.list()),
            Request::AddContact(contact) => self.contacts.insert(contact).into(),
            Request::DeleteContact(name) => self.contacts.delete(&name)?.into(),
        })
    }

    /// Final save of both lists before the session ends
    pub fn shutdown(&self) -> Vec<JaxError> {
        log::debug!("saving {} task(s) and {} contact(s)", self.tasks.len(), self.contacts.len());
        self.tasks.persist().into_iter().chain(self.contacts.persist()).collect()
    }
}
