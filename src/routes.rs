//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`      - Create a short link
//! - `GET  /{code}`   - Short link redirect
//! - `GET  /health`   - Store health probe
//! - `GET  /error`    - Default fallback landing
//!
//! # Middleware
//!
//! - **Diagnostics** - `stack` on error bodies outside production
//! - **CORS / headers** - Permissive CORS, `nosniff`, `X-Frame-Options`
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{diagnostics, security, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router with all routes and middleware, without path normalization.
pub fn api_router(state: AppState) -> Router {
    api::routes::public_routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            diagnostics::layer,
        ))
        .with_state(state)
        .layer(security::nosniff_layer())
        .layer(security::frame_options_layer())
        .layer(security::cors_layer())
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
