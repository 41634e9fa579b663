//! Cross-origin and response hardening layers.

use axum::http::{HeaderValue, header};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// Allows any origin to call the API.
///
/// The creation endpoint is meant to be called from browser front-ends on
/// other origins.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Sets `X-Content-Type-Options: nosniff` unless a handler already did.
pub fn nosniff_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
}

/// Forbids framing of any response.
pub fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("DENY"),
    )
}
