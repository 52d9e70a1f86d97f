//! Task Edit Form Component
//!
//! Inline editor bound to the shared draft of one task.

use leptos::prelude::*;
use taskflow_core::{DueDraft, EditDraft};

use crate::context::use_task_edit;
use crate::models::TaskId;

/// Title, description and due date inputs with Save/Cancel
#[component]
pub fn TaskEditForm(
    task_id: TaskId,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_key: Callback<web_sys::KeyboardEvent>,
) -> impl IntoView {
    let slot = use_task_edit().slot();

    let read = move |f: fn(&EditDraft) -> String| {
        slot.with(|s| s.draft().filter(|d| d.task_id == task_id).map(f).unwrap_or_default())
    };
    let write = move |f: &dyn Fn(&mut EditDraft)| {
        slot.update(|s| {
            if let Some(draft) = s.draft_mut(task_id) {
                f(draft);
            }
        });
    };
    let blank_title = move || read(|d| d.title.clone()).trim().is_empty();
    let set_due = move |f: fn(&mut DueDraft, String), value: String| {
        write(&|d: &mut EditDraft| f(&mut d.due, value.clone()));
    };

    view! {
        <div class="task-edit-form">
            <input
                type="text"
                class="edit-title"
                placeholder="Task title"
                prop:value=move || read(|d| d.title.clone())
                disabled=move || saving.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    write(&|d: &mut EditDraft| d.title = value.clone());
                }
                on:keydown=move |ev| on_key.run(ev)
            />
            <textarea
                class="edit-description"
                placeholder="Add description"
                rows="2"
                prop:value=move || read(|d| d.description.clone())
                disabled=move || saving.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    write(&|d: &mut EditDraft| d.description = value.clone());
                }
                on:keydown=move |ev| on_key.run(ev)
            ></textarea>

            <div class="due-inputs">
                <input
                    type="date"
                    prop:value=move || read(|d| d.due.date.clone())
                    on:input=move |ev| set_due(|due, v| due.date = v, event_target_value(&ev))
                    on:keydown=move |ev| on_key.run(ev)
                />
                <input
                    type="time"
                    prop:value=move || read(|d| d.due.time.clone())
                    on:input=move |ev| set_due(|due, v| due.time = v, event_target_value(&ev))
                    on:keydown=move |ev| on_key.run(ev)
                />
            </div>

            <div class="form-actions">
                <button type="button" class="ghost-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button
                    type="button"
                    class="primary-btn"
                    disabled=move || blank_title() || saving.get()
                    on:click=move |_| on_save.run(())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}
