//! Sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown whenever the session is anonymous. A successful submit establishes
//! the session, which swaps this page for the dashboard shell; the page itself
//! never navigates.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::app::AppSession;

const LOGIN_MISSING_FIELDS: &str = "Enter your email and password.";
const REGISTER_MISSING_FIELDS: &str = "Enter your name, email, and password.";

/// Which form the page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Register => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Sign in to access your tasks",
            Self::Register => "Join us to manage your tasks",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Sign up",
            Self::Register => "Already have an account? Sign in",
        }
    }
}

/// A form submission that passed the presence checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthSubmission {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
}

/// Check that every field the mode needs is filled in.
///
/// Name and email are trimmed; the password is passed through as typed.
/// Anything beyond presence is left to the server.
pub fn validate_submission(
    mode: AuthMode,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthSubmission, &'static str> {
    let email = email.trim();
    match mode {
        AuthMode::Login => {
            if email.is_empty() || password.is_empty() {
                return Err(LOGIN_MISSING_FIELDS);
            }
            Ok(AuthSubmission::Login { email: email.to_owned(), password: password.to_owned() })
        }
        AuthMode::Register => {
            let name = name.trim();
            if name.is_empty() || email.is_empty() || password.is_empty() {
                return Err(REGISTER_MISSING_FIELDS);
            }
            Ok(AuthSubmission::Register {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            })
        }
    }
}

#[component]
pub fn AuthPage(store: AppSession) -> impl IntoView {
    let mode = RwSignal::new(AuthMode::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let submission = match validate_submission(mode.get(), &name.get(), &email.get(), &password.get()) {
            Ok(submission) => submission,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let result = match submission {
                    AuthSubmission::Login { email, password } => store.login(&email, &password).await,
                    AuthSubmission::Register { name, email, password } => {
                        store.register(&name, &email, &password).await
                    }
                };
                // On success the session swaps this page out.
                if let Err(e) = result {
                    error.set(e.to_string());
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&store, submission);
    };

    let on_toggle = move |_| mode.update(|m| *m = m.toggled());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo" aria-hidden="true">"✓"</div>
                <h2 class="auth-card__title">{move || mode.get().title()}</h2>
                <p class="auth-card__subtitle">{move || mode.get().subtitle()}</p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <label class="auth-form__field">
                            <span class="auth-form__label">"Name"</span>
                            <input
                                class="auth-input"
                                type="text"
                                name="name"
                                placeholder="Enter your name"
                                required=true
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="auth-form__field">
                        <span class="auth-form__label">"Email"</span>
                        <input
                            class="auth-input"
                            type="email"
                            name="email"
                            placeholder="Enter your email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        <span class="auth-form__label">"Password"</span>
                        <input
                            class="auth-input"
                            type="password"
                            name="password"
                            placeholder="Enter your password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error" role="alert">{move || error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>
                <button class="auth-card__toggle" type="button" on:click=on_toggle>
                    {move || mode.get().toggle_prompt()}
                </button>
            </div>
        </div>
    }
}
