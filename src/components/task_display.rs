//! Task Display Component
//!
//! Read-only title, description and due date of a task.

use chrono::Local;
use leptos::prelude::*;

use crate::models::Task;

/// Human due label, e.g. "May 1, 2024 09:30"; midnight shows the date only
pub fn due_label(task: &Task) -> Option<String> {
    let due = task.due_at(&Local)?;
    let label = if due.format("%H:%M").to_string() == "00:00" {
        due.format("%b %-d, %Y").to_string()
    } else {
        due.format("%b %-d, %Y %H:%M").to_string()
    };
    Some(label)
}

#[component]
pub fn TaskDisplay(task: Task, #[prop(into)] on_edit: Callback<()>) -> impl IntoView {
    let overdue = !task.is_completed
        && task.due_at(&Local).map(|due| due < Local::now()).unwrap_or(false);
    let due = due_label(&task);
    let title_class = if task.is_completed { "task-title done" } else { "task-title" };

    view! {
        <div class="task-display" on:dblclick=move |_| on_edit.run(())>
            <p class=title_class>{task.title.clone()}</p>
            {task.description.clone().map(|description| view! {
                <p class="task-description">{description}</p>
            })}
            {due.map(|label| view! {
                <span class=if overdue { "task-due overdue" } else { "task-due" }>{label}</span>
            })}
        </div>
    }
}
