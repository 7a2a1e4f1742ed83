//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! read-only mirror of the controller's task list; it is re-synced after
//! every dispatched command.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::todo::TodoList;

/// Rendered view of the task list
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    /// Number of completed tasks
    pub completed: usize,
}

impl TodoState {
    pub fn from_list(list: &TodoList) -> Self {
        Self {
            tasks: list.tasks().to_vec(),
            completed: list.completed_count(),
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Replace the mirrored tasks with the controller's current list
pub fn store_sync_list(store: &TodoStore, list: &TodoList) {
    *store.tasks().write() = list.tasks().to_vec();
    *store.completed().write() = list.completed_count();
}
