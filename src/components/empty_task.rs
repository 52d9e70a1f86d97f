//! Empty Task Component

use leptos::prelude::*;

/// Placeholder shown when a list has no tasks
#[component]
pub fn EmptyTask(#[prop(into, default = "All tasks are done!".into())] message: String) -> impl IntoView {
    view! {
        <div class="empty-task">
            <div class="empty-illustration">"✓"</div>
            <p class="empty-message">{message}</p>
        </div>
    }
}
