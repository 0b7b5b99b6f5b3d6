//! Dashboard summary state and its one-shot loader.
//!
//! DESIGN
//! ======
//! Stats, projects and tasks are fetched concurrently and applied together.
//! If any request fails, nothing is applied: the dashboard keeps whatever it
//! showed before and the failure is only logged.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::{ApiError, AuthApi, DashboardApi};
use crate::net::types::{DashboardStats, Project, Task};
use crate::state::cell::StateCell;
use crate::state::session::{Session, SessionStore};
use crate::util::token_storage::TokenStore;

/// Number of tasks shown under "Recent Activity".
pub const RECENT_TASK_LIMIT: usize = 3;

/// Everything the dashboard shell renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub stats: DashboardStats,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    /// Whether a fetch has ever been applied.
    pub loaded: bool,
}

/// A complete, successfully fetched dashboard payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

impl DashboardState {
    pub fn apply(&mut self, data: DashboardData) {
        self.stats = data.stats;
        self.projects = data.projects;
        self.tasks = data.tasks;
        self.loaded = true;
    }

    /// The first few tasks, in server order.
    pub fn recent_tasks(&self) -> &[Task] {
        &self.tasks[..self.tasks.len().min(RECENT_TASK_LIMIT)]
    }
}

/// Fetch stats, projects and tasks in parallel.
///
/// # Errors
///
/// Returns the first failure; partial results are dropped.
pub async fn fetch_dashboard<A: DashboardApi>(api: &A, token: &str) -> Result<DashboardData, ApiError> {
    let (stats, projects, tasks) = futures::try_join!(api.stats(token), api.projects(token), api.tasks(token))?;
    Ok(DashboardData { stats, projects, tasks })
}

/// Fetch the dashboard and apply it to `state` only if every request
/// succeeded.
///
/// # Errors
///
/// Returns the fetch failure after logging it; `state` is left untouched.
pub async fn refresh_dashboard<A, C>(api: &A, token: &str, state: &C) -> Result<(), ApiError>
where
    A: DashboardApi,
    C: StateCell<DashboardState>,
{
    match fetch_dashboard(api, token).await {
        Ok(data) => {
            state.mutate(|s| s.apply(data));
            Ok(())
        }
        Err(err) => {
            log::error!("failed to fetch dashboard data: {err}");
            Err(err)
        }
    }
}

/// Refresh the dashboard with the session's current token.
///
/// A 401 means the token is no longer valid, so the session is logged out,
/// unless a different token replaced it while the fetch was in flight.
///
/// # Errors
///
/// Returns the fetch failure; see [`refresh_dashboard`].
pub async fn load_for_session<A, C, T, D>(store: &SessionStore<A, C, T>, state: &D) -> Result<(), ApiError>
where
    A: AuthApi + DashboardApi,
    C: StateCell<Session>,
    T: TokenStore,
    D: StateCell<DashboardState>,
{
    let Some(token) = store.token() else {
        log::debug!("skipping dashboard fetch without a session token");
        return Ok(());
    };

    let result = refresh_dashboard(store.api(), &token, state).await;
    if let Err(err) = &result
        && err.is_unauthorized()
        && store.token().as_deref() == Some(token.as_str())
    {
        store.logout();
    }
    result
}
