//! Titled card standing in for a screen that is not built yet.

use leptos::prelude::*;

#[component]
pub fn PlaceholderPanel(title: &'static str, note: &'static str) -> impl IntoView {
    view! {
        <section class="placeholder-panel">
            <h2 class="placeholder-panel__title">{title}</h2>
            <div class="card placeholder-panel__body">
                <p>{note}</p>
            </div>
        </section>
    }
}
