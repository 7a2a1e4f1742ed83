//! Task List Component

use leptos::prelude::*;

use super::TaskItem;
use crate::config::TASK_LIST_ID;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// Renders every task in stored order
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul id=TASK_LIST_ID>
            // keyed on the flag too, so a toggled row re-renders its styling
            <For
                each=move || store.tasks().get()
                key=|task| (task.id, task.completed)
                children=move |task| view! { <TaskItem task=task /> }
            />
        </ul>
    }
}
