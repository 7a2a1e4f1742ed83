//! New Task Form Component
//!
//! Text input plus "Add" button. Enter in the input also adds.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::config::{ADD_TASK_BUTTON_ID, INPUT_TASK_ID};
use crate::context::use_todo_context;
use crate::controller::Command;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (task_name, set_task_name) = signal(String::new());

    // The input is cleared even when the name was empty
    let add_task = move || {
        ctx.dispatch(Command::Add(task_name.get_untracked()));
        set_task_name.set(String::new());
    };

    view! {
        <div class="new-task-form">
            <input
                type="text"
                id=INPUT_TASK_ID
                placeholder="Add a task..."
                prop:value=move || task_name.get()
                on:input=move |ev| set_task_name.set(event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_task();
                    }
                }
            />
            <button id=ADD_TASK_BUTTON_ID on:click=move |_| add_task()>"Add"</button>
        </div>
    }
}
