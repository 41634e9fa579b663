//! Handler for link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "code": "promo" }
/// ```
///
/// `code` is optional; a random one is generated when it is absent.
///
/// # Response
///
/// ```json
/// {
///   "code": "ab3f9",
///   "url": "https://example.com",
///   "created_at": "2025-01-01T00:00:00Z",
///   "link": "https://short.example/ab3f9"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body, URL or code is invalid
/// - 409 Conflict if the code is already in use
/// - 503 Service Unavailable if the store fails or times out
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let Json(payload) = payload?;

    let created = state
        .link_service
        .create_short_link(payload.into_draft())
        .await?;

    Ok(Json(created.into()))
}
