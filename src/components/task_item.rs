//! Task Item Component
//!
//! One task row. Switches between the read-only display and the inline edit
//! form; only one row per list can be in edit mode at a time.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listeners::on_pointer_down_outside;
use taskflow_core::{ItemMachine, ItemPhase, KeyIntent, Liveness};

use super::{DeleteConfirmButton, TaskDisplay, TaskEditForm};
use crate::context::{use_app_context, use_task_edit};
use crate::models::{Task, TaskId};
use crate::notify::use_notifier;

/// A single task row with checkbox, display/edit body and actions
#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_update: Callback<Task>,
    #[prop(into)] on_delete: Callback<TaskId>,
    /// Repeat of a task shown earlier in the list; read-only
    #[prop(optional)]
    mirror: bool,
) -> impl IntoView {
    let edit = use_task_edit();
    let notifier = use_notifier();
    let toggle_delay_ms = use_app_context().config().ui.toggle_delay_ms;

    let id = task.id;
    let completed = task.is_completed;
    let task = StoredValue::new(task);
    let slot = edit.slot();
    let machine = RwSignal::new(if mirror { ItemMachine::mirror(id) } else { ItemMachine::new(id) });
    let owner = Liveness::new();
    let (hovered, set_hovered) = signal(false);
    let row_ref = NodeRef::<leptos::html::Li>::new();

    let phase = Memo::new(move |_| slot.with(|s| machine.with(|m| m.phase(s))));
    let is_editing = Signal::derive(move || phase.get() == ItemPhase::Editing);
    let is_saving = Signal::derive(move || phase.get() == ItemPhase::Saving);
    let is_toggling = Signal::derive(move || phase.get() == ItemPhase::Toggling);

    // Unmounting ends a pending toggle and drops any draft
    on_cleanup({
        let owner = owner.clone();
        move || {
            owner.end();
            if !mirror {
                edit.release(id);
            }
        }
    });

    let start_edit = move || {
        let current = task.get_value();
        slot.update(|s| {
            let evicted = machine.with_untracked(|m| m.request_edit(s, &current, &Local));
            if let Some(draft) = evicted {
                tracing::debug!(evicted = draft.task_id, task = id, "switched editor");
            }
        });
    };

    let cancel = move || {
        if slot.with_untracked(|s| s.is_editing(id)) {
            slot.update(|s| {
                machine.with_untracked(|m| m.cancel(s));
            });
        }
    };

    let save = move || {
        let current = task.get_value();
        let mut next = machine.get_untracked();
        let Some(result) = slot.try_update(|s| next.save(s, &current)) else {
            return;
        };
        match result {
            Ok(updated) => {
                machine.set(next);
                on_update.run(updated);
                machine.update(|m| m.finish_save());
            }
            Err(err) => notifier.error(err.to_string()),
        }
    };

    let toggle = {
        let owner = owner.clone();
        move || {
            let current = task.get_value();
            let mut next = machine.get_untracked();
            let pending = slot.with_untracked(|s| next.begin_toggle(s, &current, &owner));
            let Some(pending) = pending else { return };
            machine.set(next);
            spawn_local(async move {
                TimeoutFuture::new(toggle_delay_ms).await;
                if let Some(updated) = pending.commit() {
                    machine.try_update(|m| m.finish_toggle());
                    on_update.run(updated);
                }
            });
        }
    };

    let on_key = move |ev: web_sys::KeyboardEvent| match KeyIntent::from_key(&ev.key()) {
        Some(KeyIntent::Save) => {
            ev.prevent_default();
            save();
        }
        Some(KeyIntent::Cancel) => {
            ev.prevent_default();
            cancel();
        }
        None => {}
    };

    // Pointer-down anywhere outside the row discards the edit
    on_pointer_down_outside(row_ref, is_editing, cancel);

    view! {
        <li
            node_ref=row_ref
            class=move || {
                let mut class = String::from("task-item");
                if is_editing.get() { class.push_str(" editing"); }
                if completed { class.push_str(" completed"); }
                class
            }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            // Completion checkbox
            <button
                class=move || {
                    let mut class = String::from("task-checkbox");
                    if completed { class.push_str(" checked"); }
                    if is_toggling.get() { class.push_str(" animating"); }
                    if hovered.get() { class.push_str(" hovered"); }
                    class
                }
                disabled=move || is_editing.get() || is_saving.get()
                on:click=move |_| toggle()
                aria-label="Toggle completion"
            >
                {move || if completed != is_toggling.get() { "✓" } else { "" }}
            </button>

            <div class="task-body">
                <Show
                    when=move || is_editing.get() || is_saving.get()
                    fallback=move || view! {
                        <div class="task-view">
                            <TaskDisplay task=task.get_value() on_edit=move || start_edit() />
                            <div class=move || if hovered.get() { "task-actions visible" } else { "task-actions" }>
                                <Show when=move || !mirror>
                                    <button class="edit-btn" on:click=move |_| start_edit()>"Edit"</button>
                                </Show>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=move || on_delete.run(id)
                                />
                            </div>
                        </div>
                    }
                >
                    <TaskEditForm
                        task_id=id
                        saving=is_saving
                        on_save=move || save()
                        on_cancel=move || cancel()
                        on_key=on_key
                    />
                </Show>
            </div>
        </li>
    }
}
