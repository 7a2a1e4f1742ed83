//! Task Item Component
//!
//! One `<li>` per task: checkbox, name, delete button.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::controller::Command;
use crate::models::Task;

/// Inline style for the task name
pub fn strike_style(completed: bool) -> &'static str {
    if completed {
        "text-decoration: line-through;"
    } else {
        "text-decoration: none;"
    }
}

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_todo_context();

    let id = task.id;
    let completed = task.completed;
    let element_id = task.element_id();
    let task_name = task.task_name;

    view! {
        <li id=element_id>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |ev| {
                    ctx.dispatch(Command::SetCompleted { id, completed: event_target_checked(&ev) });
                }
            />
            <span class="task" style=strike_style(completed)>{task_name}</span>
            <button class="delete-btn" on:click=move |_| ctx.dispatch(Command::Delete(id))>"X"</button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_style() {
        assert!(strike_style(true).contains("line-through"));
        assert!(strike_style(false).contains("none"));
    }
}
