//! Authenticated shell: header navigation plus the selected sub-view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted when the session has a user. On mount it loads the dashboard
//! summary once with the session token; a 401 from that load logs out, which
//! sends the router back to the auth page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::placeholder::PlaceholderPanel;
use crate::components::stats_card::{StatsCard, stat_cards};
use crate::net::types::User;
use crate::state::dashboard::DashboardState;
use crate::state::view::View;

pub(crate) const TASKS_TITLE: &str = "Task Manager";
pub(crate) const TASKS_NOTE: &str = "Task management interface will be implemented next";
pub(crate) const PROJECTS_TITLE: &str = "Project Manager";
pub(crate) const PROJECTS_NOTE: &str = "Project management with Kanban board will be implemented next";

/// CSS class for a navigation button.
pub fn nav_item_class(active: bool) -> &'static str {
    if active { "nav-item nav-item-active" } else { "nav-item nav-item-inactive" }
}

/// Header greeting for the signed-in user.
pub fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.name.trim().is_empty() => format!("Hi, {}", user.name.trim()),
        _ => "Hi".to_owned(),
    }
}

#[component]
pub fn DashboardShell(store: AppSession) -> impl IntoView {
    let session = *store.cell();
    let current = RwSignal::new(View::default());
    let dashboard = RwSignal::new(DashboardState::default());

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::state::dashboard::load_for_session(&store, &dashboard).await {
                log::debug!("dashboard left on previous data: {e}");
            }
        });
    }

    let on_logout = move |_| store.logout();
    let on_select = Callback::new(move |item: View| current.set(item));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div class="dashboard-header__brand">
                    <span class="dashboard-header__logo" aria-hidden="true">"✓"</span>
                    <h1>"TaskFlow"</h1>
                </div>
                <nav class="dashboard-nav">
                    {View::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button
                                    class=move || nav_item_class(current.get() == item)
                                    on:click=move |_| current.set(item)
                                >
                                    {item.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="dashboard-header__account">
                    <span class="dashboard-header__greeting">
                        {move || session.with(|s| greeting(s.user.as_ref()))}
                    </span>
                    <button class="btn dashboard-header__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </div>
            </header>
            <main class="dashboard-main">
                {move || match current.get() {
                    View::Dashboard => view! { <DashboardHome dashboard=dashboard on_select=on_select/> }.into_any(),
                    View::Tasks => view! { <PlaceholderPanel title=TASKS_TITLE note=TASKS_NOTE/> }.into_any(),
                    View::Projects => view! { <PlaceholderPanel title=PROJECTS_TITLE note=PROJECTS_NOTE/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Summary cards, quick actions and the recent-task list.
#[component]
fn DashboardHome(dashboard: RwSignal<DashboardState>, on_select: Callback<View>) -> impl IntoView {
    view! {
        <section class="dashboard-home">
            <div class="dashboard-home__welcome">
                <h2>"Welcome to TaskFlow"</h2>
                <p>"Manage your tasks and projects efficiently"</p>
            </div>
            <div class="stats-grid">
                {move || {
                    dashboard.with(|d| stat_cards(&d.stats))
                        .into_iter()
                        .map(|card| view! { <StatsCard card=card/> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="dashboard-home__panels">
                <div class="card">
                    <h3>"Quick Actions"</h3>
                    <button class="quick-action quick-action--task" on:click=move |_| on_select.run(View::Tasks)>
                        "+ Create New Task"
                    </button>
                    <button
                        class="quick-action quick-action--project"
                        on:click=move |_| on_select.run(View::Projects)
                    >
                        "+ Create New Project"
                    </button>
                </div>
                <div class="card">
                    <h3>"Recent Activity"</h3>
                    <ul class="recent-activity">
                        {move || {
                            dashboard.with(|d| {
                                d.recent_tasks()
                                    .iter()
                                    .map(|task| view! { <li class="recent-activity__item">{task.title.clone()}</li> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </ul>
                </div>
            </div>
        </section>
    }
}
