//! To-Do List App
//!
//! Root component: loads the stored tasks and wires up the view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, TaskList};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::controller::TodoController;
use crate::storage::BrowserStorage;
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    // Initialize from local storage
    let controller = TodoController::init(BrowserStorage::new(config.storage_key));
    let store = Store::new(TodoState::from_list(controller.list()));

    // Provide context to all children
    provide_context(store);
    provide_context(TodoContext::new(StoredValue::new(controller), store));

    view! {
        <main class="todo-app">
            <h1>"To-Do List"</h1>

            <NewTaskForm />

            <TaskList />

            <p class="task-count">
                {move || {
                    let total = store.tasks().read().len();
                    if total == 0 {
                        "No tasks yet".to_string()
                    } else {
                        format!("{} tasks, {} completed", total, store.completed().get())
                    }
                }}
            </p>
        </main>
    }
}
