//! Session store: who is logged in, and the only writer of the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view router reads `Session` to pick between the loading indicator, the
//! auth form and the dashboard shell. Pages never touch the token directly;
//! they call `restore`, `login`, `register` and `logout` on a `SessionStore`
//! handle passed down as a prop.
//!
//! DESIGN
//! ======
//! The store is assembled from three seams: an `AuthApi`, a
//! `StateCell<Session>` and a `TokenStore`. The app wires in HTTP, an
//! `RwSignal` and `localStorage`; tests wire in mocks and a `RefCell`.
//!
//! SEQUENCING
//! ==========
//! `Session` carries two private counters. Starting `restore`, `login` or
//! `register` takes a ticket from `started`; `applied` records the newest
//! ticket whose outcome reached the session. A completion applies only if its
//! ticket is newer than `applied`, so an operation is invalidated by a newer
//! one that landed, never by one that merely started (or failed). `logout`
//! marks everything started so far as applied, cancelling in-flight
//! sign-ins. A superseded restore still clears `loading`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::state::cell::StateCell;
use crate::util::token_storage::TokenStore;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Coarse lifecycle phase derived from a `Session`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup restore has not resolved yet.
    Initializing,
    /// A user is known.
    Authenticated,
    /// Restore finished (or logout happened) with no user.
    Anonymous,
}

/// Sequence number handed to an operation when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Current credential state.
///
/// `user` is only ever set together with `token`. The reverse does not hold:
/// during restore the stored token is present while the user is unknown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    started: u64,
    applied: u64,
}

impl Default for Session {
    /// A fresh session starts in the `Initializing` phase.
    fn default() -> Self {
        Self { token: None, user: None, loading: true, started: 0, applied: 0 }
    }
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        if self.user.is_some() {
            SessionPhase::Authenticated
        } else if self.loading {
            SessionPhase::Initializing
        } else {
            SessionPhase::Anonymous
        }
    }

    fn begin(&mut self) -> Ticket {
        self.started += 1;
        Ticket(self.started)
    }

    /// Claim the session for `ticket` unless a newer outcome already landed.
    fn claim(&mut self, ticket: Ticket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }

    fn cancel_in_flight(&mut self) {
        self.applied = self.started;
    }

    fn establish(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}

/// Why a login or registration did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server (or the transport) refused; the message is user-facing.
    #[error("{0}")]
    Rejected(String),
    /// A newer auth operation or a logout started before this one resolved.
    #[error("sign-in was superseded by a newer request")]
    Superseded,
}

/// Outcome of `login`/`register`.
pub type AuthResult = Result<(), AuthError>;

/// Handle owning the session lifecycle.
#[derive(Clone, Debug)]
pub struct SessionStore<A, C, T> {
    api: A,
    cell: C,
    tokens: T,
}

impl<A, C, T> SessionStore<A, C, T>
where
    A: AuthApi,
    C: StateCell<Session>,
    T: TokenStore,
{
    pub fn new(api: A, cell: C, tokens: T) -> Self {
        Self { api, cell, tokens }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The underlying session holder, for readers such as the view router.
    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.cell.peek(|s| s.token.clone()).flatten()
    }

    /// Re-establish the session from the persisted token. Called once at
    /// startup; failures end in the logged-out state and are only logged.
    pub async fn restore(&self) {
        let Some(token) = self.tokens.load() else {
            self.cell.mutate(Session::clear);
            return;
        };

        let Some(ticket) = self.cell.mutate(|s| {
            s.token = Some(token.clone());
            s.user = None;
            s.begin()
        }) else {
            return;
        };

        match self.api.me(&token).await {
            Ok(user) => {
                self.cell.mutate(|s| {
                    if s.claim(ticket) {
                        s.user = Some(user);
                    }
                    s.loading = false;
                });
            }
            Err(err) => {
                log::warn!("failed to restore session: {err}");
                let current = self
                    .cell
                    .mutate(|s| {
                        let current = s.claim(ticket);
                        if current {
                            s.clear();
                        }
                        s.loading = false;
                        current
                    })
                    .unwrap_or(false);
                if current {
                    self.tokens.clear();
                }
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` with the server's `detail` (or a generic
    /// message) when the request fails, and `AuthError::Superseded` when a
    /// newer operation won. The session is untouched in both cases.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let ticket = self.begin()?;
        let result = self.api.login(&request).await;
        self.finish(ticket, result, LOGIN_FAILED)
    }

    /// Create an account and sign in to it.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionStore::login`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthResult {
        let request = RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() };
        let ticket = self.begin()?;
        let result = self.api.register(&request).await;
        self.finish(ticket, result, REGISTRATION_FAILED)
    }

    /// Drop the session and its persisted token. Cancels in-flight sign-ins.
    pub fn logout(&self) {
        self.cell.mutate(|s| {
            s.cancel_in_flight();
            s.clear();
        });
        self.tokens.clear();
    }

    fn begin(&self) -> Result<Ticket, AuthError> {
        self.cell.mutate(Session::begin).ok_or(AuthError::Superseded)
    }

    fn finish(&self, ticket: Ticket, result: Result<AuthResponse, ApiError>, fallback: &str) -> AuthResult {
        let AuthResponse { access_token, user, .. } = result.map_err(|err| {
            log::warn!("auth request failed: {err}");
            AuthError::Rejected(err.detail().unwrap_or(fallback).to_owned())
        })?;

        let user_id = user.id.clone();
        let applied = self
            .cell
            .mutate(|s| {
                if !s.claim(ticket) {
                    return false;
                }
                s.establish(access_token.clone(), user);
                true
            })
            .unwrap_or(false);
        if !applied {
            log::info!("discarding superseded auth response for user {user_id}");
            return Err(AuthError::Superseded);
        }

        self.tokens.save(&access_token);
        log::info!("session established for user {user_id}");
        Ok(())
    }
}
