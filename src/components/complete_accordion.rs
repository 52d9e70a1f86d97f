//! Complete Accordion Component
//!
//! Collapsible "Completed (n)" section under the inbox. The list is only
//! mounted while expanded, so collapsing drops any edit in progress there.

use leptos::prelude::*;
use taskflow_core::Accordion;

use super::TaskList;
use crate::models::{Task, TaskId};

#[component]
pub fn CompleteAccordion(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] has_more: Signal<bool>,
    #[prop(into)] on_load_more: Callback<()>,
    #[prop(into)] on_update: Callback<Task>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new());
    let expanded = move || accordion.with(|a| a.is_expanded());

    view! {
        <section class="complete-accordion">
            <button
                class="accordion-header"
                on:click=move |_| {
                    accordion.update(|a| {
                        a.toggle();
                    });
                }
            >
                <span class="accordion-title">{move || format!("Completed ({})", tasks.with(|t| t.len()))}</span>
                <span class=move || if expanded() { "chevron open" } else { "chevron" }>"›"</span>
            </button>

            <Show when=expanded>
                <div class="accordion-body">
                    <TaskList tasks=tasks on_update=on_update on_delete=on_delete />
                    <Show when=move || has_more.get()>
                        <button class="link-btn" on:click=move |_| on_load_more.run(())>"Load More"</button>
                    </Show>
                </div>
            </Show>
        </section>
    }
}
