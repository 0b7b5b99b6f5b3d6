//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health probe, the compiled WASM/CSS bundle under `/pkg` and
//! Leptos SSR rendering under a single Axum router. The TaskFlow REST API is
//! a separate service; this process never proxies it.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::error::HostError;

/// Routes that do not depend on the Leptos configuration.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full app: health probe + `/pkg` assets + Leptos SSR at `/`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = site_root.to_string_lossy().into_owned().into();
    }
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root_path.display(), "serving leptos bundle");

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
