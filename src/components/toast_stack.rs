//! Toast Stack Component

use leptos::prelude::*;

use crate::notify::use_notifier;

/// Renders queued toasts in the corner
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span>{toast.message}</span>
                            <button class="toast-close" on:click=move |_| notifier.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
