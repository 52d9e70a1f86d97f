//! Task Form Component
//!
//! Creation card: a single title input that expands into description, due
//! date and priority fields on focus.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskflow_core::{CreateForm, FormPhase, Priority};

use crate::models::Task;
use crate::notify::use_notifier;
use crate::tasks::use_tasks;

#[component]
pub fn TaskForm(
    /// Called with the created task after the backend accepts it
    #[prop(optional, into)]
    on_added: Option<Callback<Task>>,
) -> impl IntoView {
    let tasks = use_tasks();
    let notifier = use_notifier();
    let form = RwSignal::new(CreateForm::new());

    let submitting = move || form.with(|f| f.is_submitting());
    let expanded = move || form.with(|f| f.phase() != FormPhase::Collapsed);

    let submit = move || {
        let payload = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(payload)) => payload,
            Some(Err(err)) if err.is_user_facing() => {
                notifier.error(err.to_string());
                return;
            }
            // a submit already running
            _ => return,
        };
        spawn_local(async move {
            match tasks.add_task(payload).await {
                Ok(created) => {
                    form.try_update(|f| f.submit_succeeded());
                    notifier.success("Task added successfully!");
                    if let Some(on_added) = on_added {
                        on_added.run(created);
                    }
                }
                Err(err) => {
                    tracing::error!(%err, "error adding task");
                    form.try_update(|f| f.submit_failed());
                    notifier.error("Failed to add task.");
                }
            }
        });
    };

    let on_key = move |ev: web_sys::KeyboardEvent| {
        if CreateForm::wants_submit(&ev.key()) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class=move || if form.with(|f| f.is_highlighted()) { "task-form card highlighted" } else { "task-form card" }>
            <button
                type="button"
                class=move || if expanded() { "expand-btn open" } else { "expand-btn" }
                on:click=move |_| form.update(|f| f.toggle_expanded())
                aria-label="Toggle task form"
            >
                "+"
            </button>

            <div class="task-form-fields">
                <input
                    type="text"
                    class="new-title"
                    placeholder="Add new task"
                    prop:value=move || form.with(|f| f.title.clone())
                    disabled=submitting
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.title = value);
                    }
                    on:focus=move |_| form.update(|f| f.focus())
                    on:blur=move |_| form.update(|f| f.blur())
                    on:keydown=on_key
                />

                <div class=move || if expanded() { "form-extra open" } else { "form-extra" }>
                    <textarea
                        placeholder="Add description"
                        rows="2"
                        prop:value=move || form.with(|f| f.description.clone())
                        disabled=submitting
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }
                        on:keydown=on_key
                    ></textarea>

                    <div class="due-inputs">
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.due.date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.due.date = value);
                            }
                        />
                        <input
                            type="time"
                            prop:value=move || form.with(|f| f.due.time.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.due.time = value);
                            }
                        />
                        <select
                            class="priority-select"
                            prop:value=move || form.with(|f| f.priority.as_str().to_string())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.priority = Priority::parse_lossy(&value));
                            }
                        >
                            {Priority::ALL.iter().map(|priority| view! {
                                <option value=priority.as_str()>{priority.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-actions">
                        <button
                            type="button"
                            class="ghost-btn"
                            disabled=submitting
                            on:click=move |_| form.update(|f| f.reset())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="primary-btn"
                            disabled=move || !form.with(|f| f.can_submit())
                            on:click=move |_| submit()
                        >
                            "Add Task"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
