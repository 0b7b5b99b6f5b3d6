//! Screen selection: which top-level screen and dashboard sub-view to show.
//!
//! DESIGN
//! ======
//! Both choices are pure functions of plain values so the routing rules can
//! be tested without mounting components.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::session::{Session, SessionPhase};

/// Top-level screen driven by the session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Auth,
    Dashboard,
}

/// Pick the top-level screen for a session.
pub fn select_screen(session: &Session) -> Screen {
    match session.phase() {
        SessionPhase::Initializing => Screen::Loading,
        SessionPhase::Anonymous => Screen::Auth,
        SessionPhase::Authenticated => Screen::Dashboard,
    }
}

/// Dashboard sub-view chosen from the shell navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Tasks,
    Projects,
}

impl View {
    /// Navigation order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Tasks, Self::Projects];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tasks => "Tasks",
            Self::Projects => "Projects",
        }
    }
}
