//! Task Section Component
//!
//! The task page body for one view: inbox (form, open tasks, completed
//! accordion) or completed. Provides the editor slot its rows share.

use leptos::prelude::*;
use leptos_listeners::on_visible;

use super::{CompleteAccordion, EmptyTask, ErrorState, Loading, TaskForm, TaskList};
use crate::context::TaskEditContext;
use crate::models::{Task, TaskId};
use crate::store::FeedKind;
use crate::tasks::use_tasks;

#[component]
pub fn TaskSection(#[prop(into)] view: Signal<FeedKind>) -> impl IntoView {
    let tasks = use_tasks();
    provide_context(TaskEditContext::new());

    Effect::new(move |_| {
        tasks.ensure_loaded(view.get());
        if view.get() == FeedKind::Inbox {
            tasks.ensure_loaded(FeedKind::Completed);
        }
    });

    let on_update = Callback::new(move |task: Task| tasks.update_task(task));
    let on_delete = Callback::new(move |id: TaskId| tasks.delete_task(id));

    let sentinel = NodeRef::<leptos::html::Div>::new();
    let can_load_more = Signal::derive(move || tasks.has_next_page(view.get()));
    on_visible(sentinel, can_load_more, move || {
        tasks.fetch_next_page(view.get_untracked());
    });

    view! {
        <div class="task-section">
            {move || {
                let kind = view.get();
                if tasks.is_loading(kind) {
                    return view! { <Loading /> }.into_any();
                }
                if let Some(message) = tasks.error(kind) {
                    return view! {
                        <ErrorState message=message on_retry=move || tasks.refetch(kind) />
                    }.into_any();
                }
                ().into_any()
            }}

            <Show when=move || !tasks.is_loading(view.get()) && tasks.error(view.get()).is_none()>
                // Creation form only in the inbox
                <Show when=move || view.get() == FeedKind::Inbox>
                    <TaskForm />
                </Show>

                <Show
                    when=move || { tasks.len(view.get()) > 0 }
                    fallback=move || {
                        let message = if view.get() == FeedKind::Completed {
                            "No completed tasks yet"
                        } else {
                            "All tasks are done!"
                        };
                        view! { <EmptyTask message=message /> }
                    }
                >
                    <TaskList
                        tasks=Signal::derive(move || tasks.items(view.get()))
                        on_update=on_update
                        on_delete=on_delete
                    />
                </Show>

                // Infinite scroll sentinel
                <div class="load-more-sentinel" node_ref=sentinel>
                    <Show when=move || tasks.is_fetching_next(view.get())>
                        <div class="spinner small"></div>
                    </Show>
                </div>

                <Show when=move || view.get() == FeedKind::Inbox>
                    <CompleteAccordion
                        tasks=Signal::derive(move || tasks.items(FeedKind::Completed))
                        has_more=Signal::derive(move || tasks.has_next_page(FeedKind::Completed))
                        on_load_more=move || tasks.fetch_next_page(FeedKind::Completed)
                        on_update=on_update
                        on_delete=on_delete
                    />
                </Show>
            </Show>
        </div>
    }
}
