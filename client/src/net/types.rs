//! Wire DTOs for the TaskFlow REST API.
//!
//! DESIGN
//! ======
//! The API is loosely typed: ids arrive as strings or numbers depending on the
//! backend, and dashboard counters may be missing or `null`. Deserializers
//! normalize those shapes here so state and page code only sees one form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/auth/me`, `/auth/login` and
/// `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier. Numeric ids are stored in decimal form.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name. Some backends omit it; an empty name is tolerated.
    #[serde(default)]
    pub name: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
    /// Account creation timestamp, if the backend reports one.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Token scheme reported by the server (normally `"bearer"`).
    #[serde(default)]
    pub token_type: Option<String>,
    /// Identity the token belongs to.
    pub user: User,
}

/// Summary counters from `/dashboard/stats`. Missing or `null` counters read
/// as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_tasks: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub completed_tasks: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub in_progress_tasks: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_projects: u64,
}

/// A project as listed by `/projects`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Accent color (hex) chosen for the project, if any.
    #[serde(default)]
    pub color: Option<String>,
}

/// A task as listed by `/tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Workflow status, e.g. `"todo"`, `"in_progress"`, `"completed"`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub project_id: Option<String>,
    /// Due date as an ISO 8601 string.
    #[serde(default)]
    pub due_date: Option<String>,
}

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => id_from_value(value).map(Some),
    }
}

/// Lenient counter: numeric strings are parsed, and anything that is not a
/// usable non-negative count reads as zero.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from_value(&serde_json::Value::deserialize(deserializer)?))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_from_value(value: &serde_json::Value) -> u64 {
    match value {
        serde_json::Value::Number(number) => number.as_u64().unwrap_or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map_or(0, |f| f.trunc() as u64)
        }),
        serde_json::Value::String(raw) => raw.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}
