//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API, the OAuth redirect endpoints and the
//! crawler directives, and stitches them with Leptos SSR rendering under a
//! single Axum router. Every page of the site is a Leptos route; compiled
//! client assets are served from `/pkg`.

pub mod admin;
pub mod auth;
pub mod registration;
pub mod robots;
pub mod system;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use records::{PartnershipApplication, VolunteerApplication};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API, auth and crawler routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auth/oauth", get(auth::oauth_redirect))
        .route("/auth/callback", get(auth::oauth_callback))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/password", post(auth::password_sign_in))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/registration", get(registration::get_registration))
        .route("/api/admin/volunteers", get(admin::list_applications::<VolunteerApplication>))
        .route(
            "/api/admin/volunteers/{id}/status",
            patch(admin::update_status::<VolunteerApplication>),
        )
        .route("/api/admin/partnerships", get(admin::list_applications::<PartnershipApplication>))
        .route(
            "/api/admin/partnerships/{id}/status",
            patch(admin::update_status::<PartnershipApplication>),
        )
        .route("/api/system/access", post(system::check_access))
        .route("/api/system/me", get(system::me))
        .route("/robots.txt", get(robots::robots))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR + static client assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled WASM, JS and CSS live under the site root's /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
