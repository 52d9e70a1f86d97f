//! Task Sidebar Component
//!
//! Inbox / Completed filter for the task page.

use leptos::prelude::*;

use crate::store::FeedKind;

#[component]
pub fn TaskSidebar(view: ReadSignal<FeedKind>, set_view: WriteSignal<FeedKind>) -> impl IntoView {
    let item = move |kind: FeedKind, label: &'static str, icon: &'static str| {
        view! {
            <button
                class=move || if view.get() == kind { "sidebar-btn active" } else { "sidebar-btn" }
                on:click=move |_| set_view.set(kind)
            >
                <span class="sidebar-icon">{icon}</span>
                {label}
            </button>
        }
    };

    view! {
        <aside class="task-sidebar">
            <h2>"Filters"</h2>
            {item(FeedKind::Inbox, "Inbox", "☐")}
            {item(FeedKind::Completed, "Completed", "☑")}
        </aside>
    }
}
