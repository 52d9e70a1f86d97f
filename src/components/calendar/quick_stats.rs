//! Quick Stats Component

use leptos::prelude::*;

use crate::models::TaskStats;

#[component]
pub fn QuickStats(#[prop(into)] stats: Signal<Option<TaskStats>>) -> impl IntoView {
    let row = move |label: &'static str, value: fn(&TaskStats) -> String| {
        view! {
            <div class="stat-row">
                <span class="muted">{label}</span>
                <span class="stat-value">
                    {move || stats.get().map(|s| value(&s)).unwrap_or_else(|| "-".to_string())}
                </span>
            </div>
        }
    };

    view! {
        <div class="quick-stats card">
            <h3>"Quick Stats"</h3>
            {row("Total tasks", |s| s.total.to_string())}
            {row("Completed", |s| s.completed.to_string())}
            {row("Pending", |s| s.pending.to_string())}
            {row("Due today", |s| s.due_today.to_string())}
            {row("Overdue", |s| s.overdue.to_string())}
            {row("Completion rate", |s| format!("{}%", s.completion_rate()))}
        </div>
    }
}
