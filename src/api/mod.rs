use anyhow::Result;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use std::sync::Arc;
use crate::auth::session::RevokedTokens;
use crate::config::Config;
use crate::db::DbPool;

pub mod router;
pub mod middleware;
pub mod handlers;

/// Application context handed to every request handler.
pub struct AppState {
    pub db: DbPool,
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    /// Token ids invalidated by logout
    pub revoked: RevokedTokens,
}

impl AppState {
    pub fn new(db: DbPool, cfg: &Config) -> Self {
        Self {
            db,
            jwt_secret: cfg.auth.jwt_secret.clone(),
            jwt_expiry_hours: cfg.auth.jwt_expiry_hours,
            revoked: RevokedTokens::new(),
        }
    }
}

pub async fn serve(cfg: Config, db: DbPool) -> Result<()> {
    let bind_addr = format!("{}:{}", cfg.api.bind, cfg.api.port);
    let state = Arc::new(AppState::new(db, &cfg));
    let cors = build_cors_layer(&cfg.api.cors_allowed_origins);
    let app = build_app(state, cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Support portal listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("No valid CORS origins configured; CORS will block all cross-origin requests");
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

pub fn build_app(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .merge(router::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
