//! Task List Component
//!
//! Renders tasks in the order given. Pages may repeat a task; each
//! occurrence gets its own row, and only the first one can be edited.

use std::collections::HashMap;

use leptos::prelude::*;

use super::TaskItem;
use crate::models::{Task, TaskId};

/// Pair each task with how many times its id appeared before it, giving
/// every row a stable key that also changes when the task's data does.
pub fn keyed_rows(tasks: Vec<Task>) -> Vec<(usize, Task)> {
    let mut seen: HashMap<TaskId, usize> = HashMap::new();
    tasks
        .into_iter()
        .map(|task| {
            let occurrence = seen.entry(task.id).or_insert(0);
            let key = *occurrence;
            *occurrence += 1;
            (key, task)
        })
        .collect()
}

#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_update: Callback<Task>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    view! {
        <ul class="task-list">
            <For
                each=move || keyed_rows(tasks.get())
                key=|row| row.clone()
                children=move |(occurrence, task)| {
                    let mirror = occurrence > 0;
                    view! { <TaskItem task=task on_update=on_update on_delete=on_delete mirror=mirror /> }
                }
            />
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_rows_number_repeats() {
        let rows = keyed_rows(vec![Task::new(1, "a"), Task::new(2, "b"), Task::new(1, "a")]);
        let keys: Vec<(usize, u64)> = rows.iter().map(|(n, t)| (*n, t.id)).collect();
        assert_eq!(keys, vec![(0, 1), (0, 2), (1, 1)]);
    }

    #[test]
    fn test_keys_change_with_task_data() {
        let before = keyed_rows(vec![Task::new(1, "a")]);
        let after = keyed_rows(vec![Task::new(1, "renamed")]);
        assert_ne!(before[0], after[0]);
    }
}
