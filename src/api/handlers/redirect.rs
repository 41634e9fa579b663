//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// - Known code: `302 Found` to the stored URL
/// - Unknown code: `302 Found` to the configured fallback URL
///
/// # Errors
///
/// Returns 503 Service Unavailable if the store fails or times out.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.resolver.resolve(&code).await?;

    let location = location_header(target.location())?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, re-serializing URLs with non-ASCII characters.
fn location_header(location: &str) -> Result<HeaderValue, AppError> {
    if location.is_ascii()
        && let Ok(value) = HeaderValue::from_str(location)
    {
        return Ok(value);
    }

    Url::parse(location)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::internal("stored URL cannot be used as a redirect location"))
}
