//! Full-page indicator shown while the startup session restore is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
