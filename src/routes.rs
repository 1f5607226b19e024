//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR pages for the client `App`, the hydration bundle under `/pkg`,
//! and a liveness probe. Every request gets a tracing span.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portal_client::app::{App, shell};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (malformed
/// `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| e.to_string())?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root_path.display(), "serving leptos assets");

    Ok(Router::new()
        .route("/healthz", get(healthz))
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
