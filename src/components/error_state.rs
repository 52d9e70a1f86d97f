//! Error State Component

use leptos::prelude::*;

/// Load failure with a retry button
#[component]
pub fn ErrorState(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-state">
            <p class="error-title">"Something went wrong"</p>
            <p class="error-message">{message}</p>
            <button class="primary-btn" on:click=move |_| on_retry.run(())>"Retry"</button>
        </div>
    }
}
