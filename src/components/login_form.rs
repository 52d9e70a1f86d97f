//! Login Form Component
//!
//! Email/password sign-in against the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::models::Credentials;
use crate::notify::use_notifier;

#[component]
pub fn LoginForm(
    /// Called after a successful sign-in
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = Credentials {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match auth.sign_in(credentials).await {
                Ok(user) => {
                    notifier.success(format!("Welcome back, {}!", user.display_name()));
                    if let Some(on_success) = on_success {
                        on_success.run(());
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "sign-in failed");
                    set_error.try_set(Some(err.to_string()));
                }
            }
            set_pending.try_set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=submit>
            <label>
                "Email"
                <input
                    type="email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit" class="primary-btn" disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}
