//! Landing endpoint for unresolved codes.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Answers the default fallback location.
///
/// # Endpoint
///
/// `GET /error`
///
/// Registered ahead of `/{code}` so the default fallback never redirects
/// back into the resolver.
pub async fn error_page_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "short link not found" })),
    )
}
