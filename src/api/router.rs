use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use super::AppState;
use super::handlers;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health (public)
        .route("/health", get(handlers::health::health_check))
        // Landing (optional auth)
        .route("/", get(handlers::index::index))
        // Auth
        .route("/login", post(handlers::auth::login))
        .route("/register", post(handlers::auth::register))
        .route("/logout", get(handlers::auth::logout).post(handlers::auth::logout))
        .route("/me", get(handlers::auth::me))
        // Tickets (protected)
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/submit", post(handlers::tickets::submit))
        .route("/ticket/{id}", get(handlers::tickets::view))
        // Support only
        .route("/update/{id}", post(handlers::tickets::update_status))
        .route("/assign/{id}", post(handlers::tickets::assign))
        .route("/support-staff", get(handlers::users::support_staff))
        .with_state(state)
}
