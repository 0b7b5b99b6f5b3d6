//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend
//! location is baked in when the crate is compiled. An unset or empty
//! `TASKFLOW_BACKEND_URL` means the API is served from the same origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `https://api.example.com`.
    pub backend_url: String,
}

impl ClientConfig {
    /// Read configuration captured at compile time.
    pub fn from_env() -> Self {
        Self::from_backend_url(option_env!("TASKFLOW_BACKEND_URL").unwrap_or_default())
    }

    pub fn from_backend_url(raw: &str) -> Self {
        Self { backend_url: raw.trim().trim_end_matches('/').to_owned() }
    }

    /// Base URL every API path is appended to.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}
