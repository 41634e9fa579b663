//! API route configuration.

use crate::api::handlers::{
    create_link_handler, error_page_handler, health_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `POST /url`     - Create a short link
/// - `GET  /health`  - Store health probe
/// - `GET  /error`   - Default fallback landing
/// - `GET  /{code}`  - Short link redirect
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(create_link_handler))
        .route("/health", get(health_handler))
        .route("/error", get(error_page_handler))
        .route("/{code}", get(redirect_handler))
}
