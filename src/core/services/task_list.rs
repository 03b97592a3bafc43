//! Task list engine
//!
//! Owns the ordered task sequence. Every change that actually alters the
//! sequence is followed by exactly one save of the whole sequence; a failed
//! save is reported as a warning and the change stays in memory.

use std::fmt::Write as _;
use std::rc::Rc;

use chrono::NaiveDate;

use super::Outcome;
use crate::core::error::JaxError;
use crate::core::models::{Task, Transition};
use crate::core::ports::{Collection, RecordStore};

/// The ordered list of tasks, bound to the store it saves into
pub struct TaskList {
    tasks: Vec<Task>,
    store: Rc<dyn RecordStore>,
}

impl std::fmt::Debug for TaskList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskList").field("tasks", &self.tasks).finish_non_exhaustive()
    }
}

impl TaskList {
    /// Start from an empty list
    #[must_use]
    pub fn new(store: Rc<dyn RecordStore>) -> Self {
        Self::with_tasks(Vec::new(), store)
    }

    /// Start from existing tasks, in order
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>, store: Rc<dyn RecordStore>) -> Self {
        Self { tasks, store }
    }

    /// Load from the store, falling back to an empty list if it cannot be read
    #[must_use]
    pub fn load(store: Rc<dyn RecordStore>) -> Self {
        match store.load_tasks() {
            Ok(tasks) => {
                log::debug!("loaded {} task(s)", tasks.len());
                Self::with_tasks(tasks, store)
            },
            Err(e) => {
                log::warn!("could not load tasks, starting empty: {e:#}");
                Self::new(store)
            },
        }
    }

    /// All tasks, in display order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Write the whole list to the store
    pub fn persist(&self) -> Option<JaxError> {
        self.store.save_tasks(&self.tasks).err().map(|e| {
            log::warn!("failed to save {}: {e:#}", Collection::Tasks);
            JaxError::PersistenceWriteFailure(e.to_string())
        })
    }

    /// Check a 0-based index against the current length
    fn position(&self, index: i64) -> Result<usize, JaxError> {
        usize::try_from(index).ok().filter(|&i| i < self.tasks.len()).ok_or(
            JaxError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            },
        )
    }

    /// Append a task
    pub fn insert(&mut self, task: Task) -> Outcome {
        let message = format!("added: {task}\nNow you have {} tasks in the list", self.tasks.len() + 1);
        self.tasks.push(task);
        Outcome::saved(message, self.persist())
    }

    /// Remove the task at a 0-based index; later tasks move up by one
    pub fn delete(&mut self, index: i64) -> Result<Outcome, JaxError> {
        let position = self.position(index)?;
        let removed = self.tasks.remove(position);
        let message = format!(
            "Noted. I've removed this task:\n  {removed}\nNow you have {} tasks in the list.",
            self.tasks.len()
        );
        Ok(Outcome::saved(message, self.persist()))
    }

    /// Mark the task at a 0-based index as done
    pub fn mark(&mut self, index: i64) -> Result<Outcome, JaxError> {
        let position = self.position(index)?;
        let task = &mut self.tasks[position];
        match task.mark() {
            Transition::Changed => {
                let message = format!("Nice! I've marked this task as done:\n{task}");
                Ok(Outcome::saved(message, self.persist()))
            },
            Transition::Unchanged => {
                Ok(Outcome::unsaved(format!("This task has already been marked done:\n{task}")))
            },
        }
    }

    /// Mark the task at a 0-based index as not done
    pub fn unmark(&mut self, index: i64) -> Result<Outcome, JaxError> {
        let position = self.position(index)?;
        let task = &mut self.tasks[position];
        match task.unmark() {
            Transition::Changed => {
                let message = format!("OK, I've marked this task as not done yet:\n{task}");
                Ok(Outcome::saved(message, self.persist()))
            },
            Transition::Unchanged => {
                Ok(Outcome::unsaved(format!("This task hasn't been marked done:\n{task}")))
            },
        }
    }

    /// Tasks occurring on `date`, in list order
    #[must_use]
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.occurs_on(date)).collect()
    }

    /// Tasks whose description contains `keyword`, ignoring case
    #[must_use]
    pub fn matching(&self, keyword: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.matches_keyword(keyword)).collect()
    }

    /// Numbered listing of every task
    #[must_use]
    pub fn list(&self) -> String {
        if self.tasks.is_empty() {
            return "List is empty.".to_string();
        }
        numbered("Here are the tasks in your list:", self.tasks.iter())
    }

    /// Numbered listing of the tasks occurring on `date`
    #[must_use]
    pub fn remind(&self, date: NaiveDate) -> String {
        let hits = self.on_date(date);
        if hits.is_empty() {
            return "No tasks found on this date.".to_string();
        }
        numbered(&format!("Reminders for {date}:"), hits.into_iter())
    }

    /// Numbered listing of the tasks matching `keyword`
    #[must_use]
    pub fn find(&self, keyword: &str) -> String {
        let hits = self.matching(keyword);
        if hits.is_empty() {
            return "No tasks found with this keyword.".to_string();
        }
        numbered("Here are the matching tasks in your list:", hits.into_iter())
    }
}

/// Header followed by `1.<task>` lines, renumbered from 1
fn numbered<'a>(header: &str, tasks: impl Iterator<Item = &'a Task>) -> String {
    let mut out = header.to_string();
    for (i, task) in tasks.enumerate() {
        let _ = write!(out, "\n{}.{task}", i + 1);
    }
    out
}
