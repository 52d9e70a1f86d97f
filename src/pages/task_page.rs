//! Task Page

use leptos::prelude::*;

use crate::components::{TaskSection, TaskSidebar};
use crate::store::FeedKind;

#[component]
pub fn TaskPage() -> impl IntoView {
    let (view, set_view) = signal(FeedKind::Inbox);

    view! {
        <div class="task-page">
            <TaskSidebar view=view set_view=set_view />
            <div class="task-main">
                <header class="page-header">
                    <h1>{move || match view.get() {
                        FeedKind::Inbox => "Inbox",
                        FeedKind::Completed => "Completed Tasks",
                    }}</h1>
                    <p class="muted">{move || match view.get() {
                        FeedKind::Inbox => "Stay organized and manage your daily tasks.",
                        FeedKind::Completed => "Review your completed accomplishments.",
                    }}</p>
                </header>
                <TaskSection view=view />
            </div>
        </div>
    }
}
