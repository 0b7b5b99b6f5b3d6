//! Dashboard summary cards.
//!
//! DESIGN
//! ======
//! The card list is derived from `DashboardStats` by a pure helper so the
//! labels and ordering are testable without rendering.

#[cfg(test)]
#[path = "stats_card_test.rs"]
mod stats_card_test;

use leptos::prelude::*;

use crate::net::types::DashboardStats;

/// One labelled figure on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    /// Accent modifier appended to the card's CSS class.
    pub tone: &'static str,
}

/// The four summary cards, in display order.
pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard { label: "Total Tasks", value: stats.total_tasks, tone: "blue" },
        StatCard { label: "Completed", value: stats.completed_tasks, tone: "green" },
        StatCard { label: "In Progress", value: stats.in_progress_tasks, tone: "amber" },
        StatCard { label: "Projects", value: stats.total_projects, tone: "purple" },
    ]
}

#[component]
pub fn StatsCard(card: StatCard) -> impl IntoView {
    view! {
        <div class=format!("card stats-card stats-card--{}", card.tone)>
            <p class="stats-card__label">{card.label}</p>
            <p class="stats-card__value">{card.value}</p>
        </div>
    }
}
