//! Argument parser
//!
//! Turns a classified command and its remainder into a typed [`Request`].
//! Each routine stops at the first problem it finds and reports it as a
//! [`JaxError`]; nothing is half-built.
//!
//! Arguments are separated by literal flags (` /by `, ` /from `, ` /to `,
//! ` /p `, ` /e `), so a description cannot itself contain one of them.

use chrono::NaiveDate;

use crate::core::command::{Command, parse_command};
use crate::core::error::JaxError;
use crate::core::models::timestamp::{parse_date, parse_timestamp};
use crate::core::models::{Contact, Task};

const BY: &str = " /by ";
const FROM: &str = " /from ";
const TO: &str = " /to ";
const PHONE: &str = " /p ";
const EMAIL: &str = " /e ";

/// A fully validated command, ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Leave the session
    Bye,
    /// Show all tasks
    List,
    /// Mark the task at a 0-based index as done
    Mark(i64),
    /// Mark the task at a 0-based index as not done
    Unmark(i64),
    /// Remove the task at a 0-based index
    Delete(i64),
    /// Append a new task
    Add(Task),
    /// Show tasks occurring on a date
    Remind(NaiveDate),
    /// Search task descriptions
    Find(String),
    /// Add or replace a contact
    AddContact(Contact),
    /// Show all contacts
    Contacts,
    /// Remove a contact by name
    DeleteContact(String),
    /// Show the command reference
    Help,
    /// Clear the display
    Clear,
    /// Show the greeting
    Hello,
}

/// Parse a raw input line into a request
pub fn parse(line: &str) -> Result<Request, JaxError> {
    let (command, rest) = parse_command(line)?;
    parse_args(command, rest)
}

/// Validate the arguments of an already classified command
pub fn parse_args(command: Command, rest: Option<&str>) -> Result<Request, JaxError> {
    Ok(match command {
        Command::Bye => Request::Bye,
        Command::List => Request::List,
        Command::Contacts => Request::Contacts,
        Command::Help => Request::Help,
        Command::Clear => Request::Clear,
        Command::Hello => Request::Hello,
        Command::Mark => Request::Mark(parse_index(rest)?),
        Command::Unmark => Request::Unmark(parse_index(rest)?),
        Command::Delete => Request::Delete(parse_index(rest)?),
        Command::Todo => Request::Add(parse_todo(rest)?),
        Command::Deadline => Request::Add(parse_deadline(rest)?),
        Command::Event => Request::Add(parse_event(rest)?),
        Command::Remind => Request::Remind(parse_remind(rest)?),
        Command::Find => Request::Find(parse_find(rest)?),
        Command::Contact => Request::AddContact(parse_contact(rest)?),
        Command::DeleteContact => Request::DeleteContact(parse_delete_contact(rest)?),
    })
}

/// Trimmed remainder, or `None` when absent or blank
fn non_blank(rest: Option<&str>) -> Option<&str> {
    rest.map(str::trim).filter(|s| !s.is_empty())
}

/// `todo <desc>`
pub fn parse_todo(rest: Option<&str>) -> Result<Task, JaxError> {
    let description = non_blank(rest).ok_or(JaxError::EmptyDescription("Todo"))?;
    Ok(Task::todo(description))
}

/// `deadline <desc> /by <yyyy-MM-dd HHmm>`
pub fn parse_deadline(rest: Option<&str>) -> Result<Task, JaxError> {
    let args = non_blank(rest).ok_or(JaxError::EmptyDescription("Deadline"))?;

    let mut segments = args.split(BY);
    let description = segments.next().unwrap_or_default().trim();
    let due = segments.next().filter(|s| !s.trim().is_empty()).ok_or(JaxError::MissingTime)?;
    if description.is_empty() {
        return Err(JaxError::EmptyDescription("Deadline"));
    }

    Ok(Task::deadline(description, parse_timestamp(due)?))
}

/// `event <desc> /from <yyyy-MM-dd HHmm> /to <yyyy-MM-dd HHmm>`
pub fn parse_event(rest: Option<&str>) -> Result<Task, JaxError> {
    let args = non_blank(rest).ok_or(JaxError::EmptyDescription("Event"))?;

    let mut segments = args.split(FROM);
    let description = segments.next().unwrap_or_default().trim();
    let span = segments.next().filter(|s| !s.is_empty()).ok_or(JaxError::MissingStart)?;

    let mut bounds = span.split(TO);
    let start = bounds.next().unwrap_or_default();
    let end = bounds.next().filter(|s| !s.trim().is_empty()).ok_or(JaxError::MissingEnd)?;
    if description.is_empty() {
        return Err(JaxError::EmptyDescription("Event"));
    }

    Ok(Task::event(description, parse_timestamp(start)?, parse_timestamp(end)?))
}

/// `mark|unmark|delete <n>`, returned as a 0-based index
///
/// The index may be negative; the task list rejects it.
pub fn parse_index(rest: Option<&str>) -> Result<i64, JaxError> {
    let token = non_blank(rest).ok_or(JaxError::MissingIndex)?;
    let number: i64 = token.parse().map_err(|_| JaxError::InvalidIndex(token.to_string()))?;
    Ok(number.saturating_sub(1))
}

/// `remind <yyyy-MM-dd>`
pub fn parse_remind(rest: Option<&str>) -> Result<NaiveDate, JaxError> {
    let date = non_blank(rest).ok_or(JaxError::MissingDate)?;
    parse_date(date)
}

/// `find <keyword>`
pub fn parse_find(rest: Option<&str>) -> Result<String, JaxError> {
    non_blank(rest).map(String::from).ok_or(JaxError::MissingKeyword)
}

/// `contact <name> /p <phone> /e <email>`
pub fn parse_contact(rest: Option<&str>) -> Result<Contact, JaxError> {
    let args = rest.unwrap_or_default();
    let (name, details) = args.split_once(PHONE).ok_or(JaxError::MissingContactFields)?;
    let (phone, email) = details.split_once(EMAIL).ok_or(JaxError::MissingContactFields)?;

    let (name, phone, email) = (name.trim(), phone.trim(), email.trim());
    if name.is_empty() || phone.is_empty() || email.is_empty() {
        return Err(JaxError::EmptyContactField);
    }

    Ok(Contact::new(name, phone, email))
}

/// `delcontact <name>`
pub fn parse_delete_contact(rest: Option<&str>) -> Result<String, JaxError> {
    non_blank(rest).map(String::from).ok_or(JaxError::MissingName)
}
