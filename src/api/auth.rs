//! Auth endpoints

use super::{fetch_empty, fetch_json, ApiClient, ApiResult};
use crate::models::{AuthSession, Credentials, User};

pub async fn login(client: &ApiClient, credentials: &Credentials) -> ApiResult<AuthSession> {
    tracing::info!(email = %credentials.email, "signing in");
    fetch_json(client.post("auth/login").json(credentials)).await
}

/// Validate the stored token
pub async fn current_user(client: &ApiClient) -> ApiResult<User> {
    fetch_json(client.get("auth/me")).await
}

pub async fn logout(client: &ApiClient) -> ApiResult<()> {
    fetch_empty(client.post("auth/logout")).await
}
