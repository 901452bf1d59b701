//! Crawler directives.

use std::fmt::Write;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::config::SiteConfig;
use crate::state::AppState;

/// Paths that are private to a signed-in user or never worth indexing.
const DISALLOWED: [&str; 5] = ["/admin", "/dashboard", "/login", "/forgot-password", "/reset-password"];

/// The robots document for `site`.
#[must_use]
pub fn robots_body(site: &SiteConfig) -> String {
    let mut body = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED {
        let _ = writeln!(body, "Disallow: {path}");
    }
    let _ = write!(body, "\nSitemap: {}/sitemap.xml\nHost: {}\n", site.url, site.host);
    body
}

/// `GET /robots.txt`
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_body(&state.config.site),
    )
}

#[cfg(test)]
#[path = "robots_test.rs"]
mod tests;
