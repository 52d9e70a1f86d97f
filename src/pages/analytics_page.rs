//! Analytics Page
//!
//! Totals and simple bar lists built from the analytics snapshot.

use leptos::prelude::*;

use crate::models::{bar_ratios, AnalyticsSnapshot, SeriesPoint};
use crate::store::{store_analytics, use_task_store};
use crate::tasks::use_tasks;

#[component]
fn StatCard(title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card card">
            <span class="muted">{title}</span>
            <span class="stat-card-value">{value}</span>
        </div>
    }
}

#[component]
fn BarList(title: &'static str, points: Vec<SeriesPoint>) -> impl IntoView {
    let ratios = bar_ratios(&points);
    view! {
        <div class="bar-list card">
            <h3>{title}</h3>
            {if points.is_empty() {
                view! { <p class="muted">"No data yet"</p> }.into_any()
            } else {
                points.into_iter().zip(ratios).map(|(point, ratio)| view! {
                    <div class="bar-row">
                        <span class="bar-label">{point.label}</span>
                        <div class="bar-track">
                            <div class="bar-fill" style=format!("width: {:.1}%;", ratio)></div>
                        </div>
                        <span class="bar-count">{point.count}</span>
                    </div>
                }).collect_view().into_any()
            }}
        </div>
    }
}

fn snapshot_view(data: AnalyticsSnapshot) -> impl IntoView {
    let (completed_pct, uncompleted_pct) = data.status.percentages();
    let average = data.average_label();
    let AnalyticsSnapshot {
        status,
        growth,
        deadlines,
        task_per_month,
        ..
    } = data;
    view! {
        <div class="analytics-cards">
            <StatCard title="Completed" value=status.completed.to_string() />
            <StatCard title="Uncompleted" value=status.uncompleted.to_string() />
            <StatCard title="Avg. Tasks / Day" value=average />
        </div>

        <div class="analytics-charts">
            <BarList title="Task Growth Over Time" points=growth />

            <div class="status-split card">
                <h3>"Task Completion Status"</h3>
                <div class="split-bar">
                    <div class="split-completed" style=format!("width: {:.1}%;", completed_pct)></div>
                    <div class="split-uncompleted" style=format!("width: {:.1}%;", uncompleted_pct)></div>
                </div>
                <p class="muted">
                    {format!("Completed {:.0}% · Uncompleted {:.0}%", completed_pct, uncompleted_pct)}
                </p>
            </div>
        </div>

        <BarList title="Upcoming Deadlines" points=deadlines />
        <BarList title="Tasks Per Month" points=task_per_month />
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let tasks = use_tasks();
    let store = use_task_store();

    Effect::new(move |_| tasks.load_analytics());

    view! {
        <div class="analytics-page">
            {move || match store_analytics(&store) {
                Some(data) => snapshot_view(data).into_any(),
                None => view! { <div class="loading-text">"Loading..."</div> }.into_any(),
            }}
        </div>
    }
}
