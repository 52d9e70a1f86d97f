//! Auth Context
//!
//! Session state for the signed-in user. The bearer token is persisted in
//! localStorage and validated against `/auth/me` on start-up.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient, ApiError, ApiResult};
use crate::config::AppConfig;
use crate::models::{AuthSession, Credentials, User};
use crate::notify::Notifier;
use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Stored token being validated
    Checking,
    SignedOut,
    SignedIn,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    token: RwSignal<Option<String>>,
    status: RwSignal<AuthStatus>,
    base_url: StoredValue<String>,
    token_key: StoredValue<String>,
    notifier: Notifier,
}

impl AuthContext {
    pub fn new(config: &AppConfig, notifier: Notifier) -> Self {
        Self::with_token(config, notifier, storage::read(&config.storage.token_key))
    }

    /// Session starting from an already known token
    pub fn with_token(config: &AppConfig, notifier: Notifier, token: Option<String>) -> Self {
        let status = if token.is_some() {
            AuthStatus::Checking
        } else {
            AuthStatus::SignedOut
        };
        Self {
            user: RwSignal::new(None),
            token: RwSignal::new(token),
            status: RwSignal::new(status),
            base_url: StoredValue::new(config.api.base_url.clone()),
            token_key: StoredValue::new(config.storage.token_key.clone()),
            notifier,
        }
    }

    /// Bearer token of the current session
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.status.get() == AuthStatus::SignedIn
    }

    /// API client carrying the current token
    pub fn client(&self) -> ApiClient {
        let base_url = self.base_url.get_value();
        ApiClient::new(&base_url, self.token.get_untracked())
    }

    /// Validate a stored token, if any
    pub fn restore(&self) {
        if self.token.get_untracked().is_none() {
            return;
        }
        let auth = *self;
        spawn_local(async move {
            match api::current_user(&auth.client()).await {
                Ok(user) => {
                    tracing::info!(user = user.id, "restored session");
                    auth.user.set(Some(user));
                    auth.status.set(AuthStatus::SignedIn);
                }
                Err(err) => {
                    tracing::info!(%err, "stored session rejected");
                    auth.notifier.info("Your session has ended, please sign in again.");
                    auth.clear();
                }
            }
        });
    }

    pub async fn sign_in(&self, credentials: Credentials) -> ApiResult<User> {
        let session = api::login(&self.client(), &credentials).await?;
        Ok(self.accept(session))
    }

    fn accept(&self, session: AuthSession) -> User {
        storage::write(&self.token_key.get_value(), &session.token);
        self.token.set(Some(session.token));
        self.user.set(Some(session.user.clone()));
        self.status.set(AuthStatus::SignedIn);
        session.user
    }

    pub fn logout(&self) {
        let auth = *self;
        spawn_local(async move {
            match api::logout(&auth.client()).await {
                Ok(()) => auth.notifier.success("Logout successful!"),
                Err(err) => {
                    tracing::warn!(%err, "logout request failed");
                    auth.notifier.error("Logout failed!");
                }
            }
            // local session ends either way
            auth.clear();
        });
    }

    /// React to a 401 from any request
    pub fn expire(&self, err: &ApiError) {
        if err.is_unauthorized() && self.status.get_untracked() == AuthStatus::SignedIn {
            self.notifier.error(err.to_string());
            self.clear();
        }
    }

    fn clear(&self) {
        storage::remove(&self.token_key.get_value());
        self.token.set(None);
        self.user.set(None);
        self.status.set(AuthStatus::SignedOut);
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
