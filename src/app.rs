//! TaskFlow App
//!
//! Root component: provides shared state, gates everything behind sign-in
//! and switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::{AuthContext, AuthStatus};
use crate::components::{Loading, LoginForm, Navbar, ToastStack};
use crate::config::load_config;
use crate::context::{AppContext, Page};
use crate::notify::Notifier;
use crate::pages::{AnalyticsPage, CalendarPage, TaskPage};
use crate::store::{store_reset, TaskState};
use crate::tasks::use_tasks;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // State
    let notifier = Notifier::new(config.ui.toast_timeout_ms);
    let auth = AuthContext::new(&config, notifier);
    let store = Store::new(TaskState::default());
    let (page, set_page) = signal(Page::Tasks);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((page, set_page), (reload_trigger, set_reload_trigger), config);

    // Provide context to all children
    provide_context(notifier);
    provide_context(auth);
    provide_context(store);
    provide_context(ctx);

    let tasks = use_tasks();
    auth.restore();

    // Sign-in loads fresh data, sign-out drops it
    Effect::new(move |previous: Option<AuthStatus>| {
        let status = auth.status();
        match status {
            AuthStatus::SignedIn if previous != Some(AuthStatus::SignedIn) => ctx.reload(),
            AuthStatus::SignedOut => {
                store_reset(&store);
                ctx.navigate(Page::Tasks);
            }
            _ => {}
        }
        status
    });

    // Reload task data when triggered
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        if trigger > 0 {
            tracing::debug!(trigger, "reloading task data");
            tasks.invalidate();
        }
    });

    view! {
        <Navbar />
        <main class="app-main">
            {move || match auth.status() {
                AuthStatus::Checking => view! { <Loading /> }.into_any(),
                AuthStatus::SignedOut => view! {
                    <section class="landing">
                        <h1>"TaskFlow"</h1>
                        <p class="muted">"Sign in to manage your tasks."</p>
                        <LoginForm />
                    </section>
                }.into_any(),
                AuthStatus::SignedIn => match ctx.page.get() {
                    Page::Tasks => view! { <TaskPage /> }.into_any(),
                    Page::Calendar => view! { <CalendarPage /> }.into_any(),
                    Page::Analytics => view! { <AnalyticsPage /> }.into_any(),
                },
            }}
        </main>
        <ToastStack />
    }
}
