//! Calendar Header Component

use chrono::NaiveDate;
use leptos::prelude::*;

use super::ViewMode;

#[component]
pub fn HeaderSection(
    #[prop(into)] focus: Signal<NaiveDate>,
    mode: RwSignal<ViewMode>,
    /// -1 or +1: a month in month view, a week in week view
    #[prop(into)] on_navigate: Callback<i32>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let mode_btn = move |target: ViewMode, label: &'static str| {
        view! {
            <button
                class=move || if mode.get() == target { "mode-btn active" } else { "mode-btn" }
                on:click=move |_| mode.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="calendar-header card">
            <div class="calendar-header-top">
                <div class="calendar-title">
                    <h1>"Calendar"</h1>
                    <p class="muted">"Manage your tasks efficiently"</p>
                </div>
                <div class="calendar-controls">
                    <button class="primary-btn" on:click=move |_| on_add.run(())>"+ Add Task"</button>
                    <div class="mode-switch">
                        {mode_btn(ViewMode::Month, "Month")}
                        {mode_btn(ViewMode::Week, "Week")}
                    </div>
                </div>
            </div>

            // Period navigation
            <div class="calendar-nav">
                <button class="outline-btn" on:click=move |_| on_navigate.run(-1) aria-label="Previous">"‹"</button>
                <h2>{move || focus.get().format("%B %Y").to_string()}</h2>
                <button class="outline-btn" on:click=move |_| on_navigate.run(1) aria-label="Next">"›"</button>
            </div>
        </div>
    }
}
