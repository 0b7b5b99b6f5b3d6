//! REST API client for the TaskFlow backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! `ApiError::Unavailable`, since the endpoints are only reachable from the
//! browser.
//!
//! DESIGN
//! ======
//! There is no ambient default `Authorization` header. Calls that need a
//! bearer token take it as an argument, so the header always matches the
//! token the caller read from the session.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures all surface as `ApiError`. Non-2xx
//! bodies are mined for a `detail` message that callers can show to users.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, DashboardStats, LoginRequest, Project, RegisterRequest, Task, User};
use crate::config::ClientConfig;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request body could not be encoded.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is not available in this build (SSR or native).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided explanation, if the error body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail: Some(detail), .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Extract a human-readable message from an error body.
///
/// Accepts `{"detail": "..."}` and validation-style
/// `{"detail": [{"msg": "..."}, ...]}`; list entries are joined with `"; "`.
pub fn parse_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => {
            let detail = detail.trim();
            (!detail.is_empty()).then(|| detail.to_owned())
        }
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.as_str().or_else(|| item.get("msg").and_then(serde_json::Value::as_str)))
                .filter(|msg| !msg.trim().is_empty())
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// API SEAMS
// =============================================================================

/// Authentication endpoints used by the session store.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    /// `GET /auth/me` with the given bearer token.
    async fn me(&self, token: &str) -> Result<User, ApiError>;
}

/// Read-only endpoints behind the dashboard.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn stats(&self, token: &str) -> Result<DashboardStats, ApiError>;
    async fn projects(&self, token: &str) -> Result<Vec<Project>, ApiError>;
    async fn tasks(&self, token: &str) -> Result<Vec<Task>, ApiError>;
}

impl<A: AuthApi> AuthApi for &A {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        (**self).login(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        (**self).register(request).await
    }

    async fn me(&self, token: &str) -> Result<User, ApiError> {
        (**self).me(token).await
    }
}

impl<A: DashboardApi> DashboardApi for &A {
    async fn stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        (**self).stats(token).await
    }

    async fn projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        (**self).projects(token).await
    }

    async fn tasks(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        (**self).tasks(token).await
    }
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

/// `gloo-net` backed client rooted at `{backend}/api`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base() }
    }

    /// Absolute URL for an API path such as `/auth/me`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::post_json(&self.url("/auth/login"), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::post_json(&self.url("/auth/register"), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn me(&self, token: &str) -> Result<User, ApiError> {
        self.get_json("/auth/me", token).await
    }
}

impl DashboardApi for HttpApi {
    async fn stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard/stats", token).await
    }

    async fn projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects", token).await
    }

    async fn tasks(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        self.get_json("/tasks", token).await
    }
}

impl HttpApi {
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::get_json(&self.url(path), token).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, token);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_header, parse_error_detail};

    pub(super) async fn get_json<T: DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
        let resp = Request::get(url)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }

    pub(super) async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
        let resp = Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, detail: parse_error_detail(&body) });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}
