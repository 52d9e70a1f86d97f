//! Navbar Component
//!
//! Brand, page navigation, theme toggle and the user menu.

use leptos::prelude::*;
use leptos_listeners::on_pointer_down_outside;

use super::{LoginForm, Modal};
use crate::auth::use_auth;
use crate::context::{use_app_context, Page};
use crate::storage::{self, Theme};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_auth();
    let theme_key = ctx.config().storage.theme_key;

    let theme = RwSignal::new(storage::load_theme(&theme_key));
    Effect::new(move |_| storage::apply_theme(&theme_key, theme.get()));

    let (dropdown_open, set_dropdown_open) = signal(false);
    let (mobile_open, set_mobile_open) = signal(false);
    let login_open = RwSignal::new(false);
    let dropdown_ref = NodeRef::<leptos::html::Div>::new();

    // Close the user menu on any click outside it
    on_pointer_down_outside(dropdown_ref, dropdown_open.into(), move || set_dropdown_open.set(false));

    let nav_links = move |class: &'static str| {
        Page::ALL
            .iter()
            .map(|page| {
                let page = *page;
                view! {
                    <button
                        class=move || if ctx.page.get() == page { format!("{} active", class) } else { class.to_string() }
                        on:click=move |_| {
                            ctx.navigate(page);
                            set_mobile_open.set(false);
                        }
                    >
                        {page.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            // Brand
            <button class="brand" on:click=move |_| ctx.navigate(Page::Tasks)>
                <span class="brand-logo">"✓"</span>
                <span class="brand-name">"TaskFlow"</span>
            </button>

            <Show when=move || auth.is_signed_in()>
                <div class="nav-links">{nav_links("nav-link")}</div>
            </Show>

            <div class="nav-actions">
                <button
                    class="theme-toggle"
                    on:click=move |_| theme.update(|t| *t = t.toggled())
                    aria-label="Toggle theme"
                >
                    {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
                </button>

                <Show
                    when=move || auth.is_signed_in()
                    fallback=move || view! {
                        <button class="primary-btn" on:click=move |_| login_open.set(true)>"Login"</button>
                    }
                >
                    <div class="user-menu" node_ref=dropdown_ref>
                        <button class="avatar-btn" on:click=move |_| set_dropdown_open.update(|open| *open = !*open)>
                            <span class="avatar">
                                {move || auth.user.get().map(|u| u.initial()).unwrap_or_default()}
                            </span>
                        </button>
                        <Show when=move || dropdown_open.get()>
                            <div class="dropdown">
                                <div class="dropdown-user">
                                    <p class="dropdown-name">
                                        {move || auth.user.get().map(|u| u.display_name().to_string()).unwrap_or_default()}
                                    </p>
                                    <p class="dropdown-email">
                                        {move || auth.user.get().map(|u| u.email).unwrap_or_default()}
                                    </p>
                                </div>
                                <button
                                    class="dropdown-item"
                                    on:click=move |_| {
                                        set_dropdown_open.set(false);
                                        auth.logout();
                                        ctx.navigate(Page::Tasks);
                                    }
                                >
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <button class="mobile-toggle" on:click=move |_| set_mobile_open.update(|open| *open = !*open)>
                        {move || if mobile_open.get() { "✕" } else { "☰" }}
                    </button>
                </Show>
            </div>
        </nav>

        <Show when=move || mobile_open.get() && auth.is_signed_in()>
            <div class="mobile-menu">{nav_links("mobile-link")}</div>
        </Show>

        <Modal open=login_open title="Sign in">
            <LoginForm on_success=move || login_open.set(false) />
        </Modal>
    }
}
