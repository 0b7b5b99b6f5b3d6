//! # client
//!
//! Leptos + WASM frontend for TaskFlow. The browser bundle (`hydrate`)
//! restores the session from `localStorage`, shows the sign-in form or the
//! dashboard shell, and talks to the TaskFlow REST API. The `ssr` build
//! renders the same component tree inside the host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
