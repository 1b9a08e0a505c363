//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only renders the Leptos app (SSR) and serves its static assets.
//! Galleries never reach it: share links carry them in the URL fragment,
//! which browsers do not send, and drafts live in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Route of the gallery editor page.
pub const EDITOR_PATH: &str = "/gallery/editor";

/// Plain HTTP routes that sit next to the Leptos app.
fn site_routes() -> Router {
    Router::new()
        .route("/", get(redirect_root_to_editor))
        .route("/gallery", get(redirect_root_to_editor))
        .route("/healthz", get(healthz))
}

async fn redirect_root_to_editor() -> Redirect {
    Redirect::temporary(EDITOR_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Site routes + Leptos SSR + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` variables).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(site_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
