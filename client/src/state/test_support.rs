//! Scripted API and storage doubles for store tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::net::api::{ApiError, AuthApi, DashboardApi};
use crate::net::types::{AuthResponse, DashboardStats, LoginRequest, Project, RegisterRequest, Task, User};
use crate::util::token_storage::TokenStore;

/// One scripted reply: available immediately, or once the paired sender fires.
pub enum Reply<T> {
    Now(Result<T, ApiError>),
    Gated(oneshot::Receiver<Result<T, ApiError>>),
}

/// Queue a reply that resolves only when the returned sender is used.
pub fn gated<T>() -> (oneshot::Sender<Result<T, ApiError>>, Reply<T>) {
    let (tx, rx) = oneshot::channel();
    (tx, Reply::Gated(rx))
}

async fn next_reply<T>(queue: &RefCell<VecDeque<Reply<T>>>) -> Result<T, ApiError> {
    let next = queue.borrow_mut().pop_front();
    match next {
        Some(Reply::Now(result)) => result,
        Some(Reply::Gated(rx)) => rx.await.unwrap_or_else(|_| Err(ApiError::Network("reply dropped".to_owned()))),
        None => Err(ApiError::Network("unscripted call".to_owned())),
    }
}

/// API double answering from per-endpoint queues and recording every call.
#[derive(Default)]
pub struct ScriptedApi {
    pub login: RefCell<VecDeque<Reply<AuthResponse>>>,
    pub register: RefCell<VecDeque<Reply<AuthResponse>>>,
    pub me: RefCell<VecDeque<Reply<User>>>,
    pub stats: RefCell<VecDeque<Reply<DashboardStats>>>,
    pub projects: RefCell<VecDeque<Reply<Vec<Project>>>>,
    pub tasks: RefCell<VecDeque<Reply<Vec<Task>>>>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl AuthApi for ScriptedApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("login {}", request.email));
        next_reply(&self.login).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("register {}", request.email));
        next_reply(&self.register).await
    }

    async fn me(&self, token: &str) -> Result<User, ApiError> {
        self.record(format!("me {token}"));
        next_reply(&self.me).await
    }
}

impl DashboardApi for ScriptedApi {
    async fn stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        self.record(format!("stats {token}"));
        next_reply(&self.stats).await
    }

    async fn projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        self.record(format!("projects {token}"));
        next_reply(&self.projects).await
    }

    async fn tasks(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        self.record(format!("tasks {token}"));
        next_reply(&self.tasks).await
    }
}

/// In-memory token store.
#[derive(Default)]
pub struct MemoryTokens {
    pub token: RefCell<Option<String>>,
}

impl MemoryTokens {
    pub fn with(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }

    pub fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.get()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

pub fn user(id: &str, name: &str) -> User {
    User { id: id.to_owned(), name: name.to_owned(), email: format!("{name}@example.com"), created_at: None }
}

pub fn auth_response(token: &str, user: User) -> AuthResponse {
    AuthResponse { access_token: token.to_owned(), token_type: Some("bearer".to_owned()), user }
}

pub fn status_error(status: u16, detail: Option<&str>) -> ApiError {
    ApiError::Status { status, detail: detail.map(str::to_owned) }
}

pub fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: title.to_owned(),
        description: None,
        status: None,
        priority: None,
        project_id: None,
        due_date: None,
    }
}

pub fn project(id: &str, name: &str) -> Project {
    Project { id: id.to_owned(), name: name.to_owned(), description: None, status: None, color: None }
}
