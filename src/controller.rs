//! Todo Controller
//!
//! Owns the task list and its storage backend. Every user action arrives as
//! a [`Command`]; the controller applies it and writes the whole collection
//! back to storage whenever something changed.

use log::{debug, error};

use crate::error::StorageResult;
use crate::models::Task;
use crate::storage::TaskStorage;
use crate::todo::TodoList;

/// User actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task with the given name (ignored when empty)
    Add(String),
    /// Checkbox changed
    SetCompleted { id: u32, completed: bool },
    Delete(u32),
}

/// Result of applying a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Task),
    Updated(Task),
    Removed(Task),
    /// Nothing matched; storage was not touched
    Unchanged,
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

pub struct TodoController<S: TaskStorage> {
    list: TodoList,
    storage: S,
}

impl<S: TaskStorage> TodoController<S> {
    /// Load the stored collection and write it back normalized.
    ///
    /// A failed write is logged; the controller still starts with whatever
    /// was loaded.
    pub fn init(storage: S) -> Self {
        let list = TodoList::from_tasks(storage.load());
        debug!("loaded {} tasks (last id {})", list.len(), list.last_assigned_id());
        let mut controller = Self { list, storage };
        if let Err(err) = controller.persist() {
            error!("failed to write tasks on startup: {}", err);
        }
        controller
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply `command`, persisting the collection if it changed.
    ///
    /// On a write error the in-memory change is kept and the error returned.
    pub fn dispatch(&mut self, command: Command) -> StorageResult<Outcome> {
        debug!("dispatch {:?}", command);
        let outcome = match command {
            Command::Add(task_name) => self.list.add(task_name).cloned().map_or(Outcome::Unchanged, Outcome::Added),
            Command::SetCompleted { id, completed } => self
                .list
                .set_completed(id, completed)
                .cloned()
                .map_or(Outcome::Unchanged, Outcome::Updated),
            Command::Delete(id) => self.list.remove(id).map_or(Outcome::Unchanged, Outcome::Removed),
        };
        if outcome.is_change() {
            self.persist()?;
        }
        Ok(outcome)
    }

    fn persist(&mut self) -> StorageResult<()> {
        self.storage.save(self.list.tasks())
    }
}
