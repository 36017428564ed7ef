//! HTTP API for the autosalon dealership.
//!
//! Routes live under `/api`; every other path is served from the static
//! directory.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use autosalon_core::AutosalonConfig;
use autosalon_storage::AutosalonStorageEngine;

use crate::errors::AppError;
use crate::handlers::{auth, car, health, order, profile, test_drive};
use crate::state::{AppState, SharedState};

/// Assemble the full router over `state`, serving `static_dir` as the fallback.
pub fn build_router(state: SharedState, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/cars", get(car::list_cars))
        .route("/cars/featured", get(car::featured_cars))
        .route("/cars/facets", get(car::facets))
        .route("/cars/:id", get(car::get_car))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/orders", get(order::list_orders).post(order::create_order))
        .route(
            "/test-drives",
            get(test_drive::list_test_drives).post(test_drive::book_test_drive),
        )
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .route("/health", get(health::health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn api_not_found() -> AppError {
    AppError::NotFound
}

/// Open storage, bind, and serve until ctrl-c or SIGTERM.
pub async fn serve(config: AutosalonConfig) -> anyhow::Result<()> {
    let engine = AutosalonStorageEngine::open(&config.storage)
        .with_context(|| format!("opening database {}", config.storage.db_path.display()))?;
    let state = AppState::new(Arc::new(engine), &config);
    let app = build_router(state, &config.server.static_dir);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!(address = %address, static_dir = %config.server.static_dir.display(), "autosalon listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
