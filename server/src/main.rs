#![recursion_limit = "256"]

mod config;
mod gateway;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration invalid");
            std::process::exit(1);
        }
    };

    let backend = match gateway::HostedBackend::new(&config.backend) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!(error = %e, "backend client init failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let site = config.site.url.clone();
    let state = state::AppState::new(Arc::new(backend), config);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %site, "modelwef listening");
    axum::serve(listener, app).await.expect("server failed");
}
