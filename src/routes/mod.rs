//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON content API and stitches it with Leptos SSR
//! rendering under a single Axum router. Page routes are wrapped by the style
//! collection middleware; API, asset and static routes are not.


pub mod content;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::document;
use crate::state::AppState;

/// JSON content API used by the hydrated browser app.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/cases", get(content::list_cases))
        .route("/api/cases/{slug}", get(content::get_case))
        .route("/api/pages/{slug}", get(content::get_page))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(site::app::App);

    let content = state.content.clone();
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || {
                provide_context(content.clone());
                document::provide_request_sheet();
            },
            {
                let opts = leptos_options.clone();
                move || site::app::shell(opts.clone())
            },
        )
        .layer(middleware::from_fn(document::collect_page_styles))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let static_dir = state.config.static_dir.clone();

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
