//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos app and serves its compiled assets. All
//! data lives behind the external REST API, which the browser calls directly
//! using the origin injected into the SSR shell.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Health probe plus the compiled WASM/JS/CSS bundle under `/pkg`.
fn support_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// Full application router: SSR pages, assets, tracing, compression.
///
/// Every SSR render gets `api` in context so the shell can publish the
/// backend origin to the hydrated client.
pub fn app(leptos_options: LeptosOptions, api: ApiConfig) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = std::path::PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(api.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    support_routes(&site_root)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
