//! Root application component and the HTML shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session signal and the store wrapping it. The store is
//! passed to pages as a prop; the screen is picked from the session phase.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loading_screen::LoadingScreen;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{auth::AuthPage, dashboard::DashboardShell};
use crate::state::session::{Session, SessionStore};
use crate::state::view::{Screen, select_screen};
use crate::util::token_storage::BrowserTokenStore;

/// Session store as wired in the running app.
pub type AppSession = SessionStore<HttpApi, RwSignal<Session>, BrowserTokenStore>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/taskflow.css"/>
        <Title text="TaskFlow"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Single route: restores the session once, then follows its phase.
#[component]
fn HomePage() -> impl IntoView {
    let session = RwSignal::new(Session::default());
    let store: AppSession = SessionStore::new(HttpApi::new(&ClientConfig::from_env()), session, BrowserTokenStore);

    // The server render stays on the loading screen; restore runs in the browser.
    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move { store.restore().await });
    }

    let screen = Memo::new(move |_| session.with(select_screen));

    move || match screen.get() {
        Screen::Loading => view! { <LoadingScreen/> }.into_any(),
        Screen::Auth => view! { <AuthPage store=store.clone()/> }.into_any(),
        Screen::Dashboard => view! { <DashboardShell store=store.clone()/> }.into_any(),
    }
}
