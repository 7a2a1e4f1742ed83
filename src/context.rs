//! Application Context
//!
//! Command dispatch shared via Leptos Context API.

use leptos::prelude::*;
use log::{debug, error};

use crate::controller::{Command, Outcome, TodoController};
use crate::storage::BrowserStorage;
use crate::store::{store_sync_list, TodoStore};

/// App-wide handle to the controller and its view store
#[derive(Clone, Copy)]
pub struct TodoContext {
    controller: StoredValue<TodoController<BrowserStorage>>,
    store: TodoStore,
}

impl TodoContext {
    pub fn new(controller: StoredValue<TodoController<BrowserStorage>>, store: TodoStore) -> Self {
        Self { controller, store }
    }

    /// Apply a user action, then re-sync the rendered list
    pub fn dispatch(&self, command: Command) {
        let store = self.store;
        self.controller.update_value(|controller| {
            match controller.dispatch(command) {
                Ok(Outcome::Added(task)) => debug!("added {} {:?}", task.element_id(), task.task_name),
                Ok(Outcome::Updated(task)) => debug!("task {} completed={}", task.id, task.completed),
                Ok(Outcome::Removed(task)) => debug!("removed task {}", task.id),
                Ok(Outcome::Unchanged) => {}
                Err(err) => error!("failed to persist tasks: {}", err),
            }
            store_sync_list(&store, controller.list());
        });
    }
}

pub fn use_todo_context() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}
