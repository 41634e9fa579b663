//! Error diagnostics middleware.
//!
//! [`crate::error::AppError`] responses carry an [`ErrorReport`] extension.
//! Outside production this layer re-renders such responses with a `stack`
//! field; in production the public body passes through untouched.

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ErrorReport;
use crate::state::AppState;

/// Adds the `stack` diagnostic to error bodies in non-production mode.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/url", post(create_link_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), diagnostics::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if st.production {
        return response;
    }

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    let mut body = report.body;
    body.stack = Some(report.stack);

    (report.status, Json(body)).into_response()
}
