//! Backend API Bindings
//!
//! Thin async wrappers over the TaskFlow REST API. Every call goes through
//! [`ApiClient`], which resolves paths against the configured base URL and
//! attaches the bearer token.

mod analytics;
mod auth;
mod task;

pub use analytics::{fetch_analytics, fetch_stats};
pub use auth::{current_user, login, logout};
pub use task::{create_task, delete_task, list_tasks, list_tasks_between, update_task};

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Session expired, please sign in again")]
    Unauthorized,

    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: absolute_base(base_url),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }
}

/// Relative base URLs are resolved against the page origin; reqwest only
/// accepts absolute URLs.
fn absolute_base(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if !base.starts_with('/') {
        return base.to_string();
    }
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, base)
}

async fn send(builder: RequestBuilder) -> ApiResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await
}

async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!(url = %response.url(), "request rejected as unauthorized");
        return Err(ApiError::Unauthorized);
    }
    let text = response.text().await.unwrap_or_default();
    let message = error_message(status, &text);
    tracing::warn!(status = status.as_u16(), %message, "api request failed");
    Err(ApiError::Http {
        status: status.as_u16(),
        message,
    })
}

/// The server's `message` field when present, else the raw body or the
/// status reason
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody { message: Some(message) }) = serde_json::from_str::<ErrorBody>(body) {
        return message;
    }
    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        body.to_string()
    }
}

/// Send and decode a JSON body
pub(crate) async fn fetch_json<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
    send(builder)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send, ignoring any body
pub(crate) async fn fetch_empty(builder: RequestBuilder) -> ApiResult<()> {
    send(builder).await.map(|_| ())
}
