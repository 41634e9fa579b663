//! Application error type and its HTTP translation.
//!
//! Every failure a handler can return is an [`AppError`]. The conversion to a
//! response happens in exactly one place ([`IntoResponse`] below); handlers and
//! services only construct and propagate values.
//!
//! # Response shape
//!
//! ```json
//! { "message": "code already in use", "code": "duplicate_code" }
//! ```
//!
//! Outside production mode [`crate::api::middleware::diagnostics`] adds a
//! `stack` field with the debug rendering of the error.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StoreError;
use crate::utils::validation::FieldViolation;

/// Serialized error body returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Error body plus the internal diagnostic, stored in response extensions.
///
/// Only the diagnostics middleware reads it.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub body: ErrorBody,
    pub stack: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Creation input was rejected; lists every violated field.
    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },

    /// The requested code is already mapped.
    #[error("code already in use")]
    DuplicateCode { code: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Persistence unreachable or timed out.
    #[error("storage is temporarily unavailable")]
    StoreUnavailable { reason: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        Self::Validation {
            message: message.into(),
            violations,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error kind.
    ///
    /// Duplicate codes map to `409 Conflict`.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::DuplicateCode { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::DuplicateCode { .. } => "duplicate_code",
            AppError::NotFound { .. } => "not_found",
            AppError::StoreUnavailable { .. } => "store_unavailable",
            AppError::Internal { .. } => "internal_error",
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            AppError::Validation { violations, .. } if !violations.is_empty() => {
                Some(json!({ "violations": violations }))
            }
            AppError::DuplicateCode { code } => Some(json!({ "short_code": code })),
            _ => None,
        }
    }

    /// Converts to the public error body (without diagnostics).
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
            code: self.code(),
            details: self.details(),
            stack: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.to_error_body();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let report = ErrorReport {
            status,
            body: body.clone(),
            stack: format!("{self:?}"),
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(report);
        response
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateCode { code, .. } => AppError::DuplicateCode { code },
            StoreError::Unavailable(reason) => AppError::store_unavailable(reason),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::ViolationKind;

    #[test]
    fn test_duplicate_code_has_stable_message() {
        let err: AppError = StoreError::DuplicateCode {
            code: "promo".to_string(),
            detail: "duplicate key value violates unique constraint".to_string(),
        }
        .into();

        assert_eq!(err.to_string(), "code already in use");
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_store_unavailable_hides_reason() {
        let err: AppError = StoreError::Unavailable("connection refused".to_string()).into();

        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_validation_body_lists_violations() {
        let err = AppError::bad_request(
            "url must be an absolute URL",
            vec![FieldViolation::new("url", ViolationKind::InvalidUrl)],
        );

        let body = serde_json::to_value(err.to_error_body()).unwrap();
        assert_eq!(body["message"], "url must be an absolute URL");
        assert_eq!(body["code"], "validation_error");
        assert_eq!(body["details"]["violations"][0]["field"], "url");
        assert_eq!(body["details"]["violations"][0]["kind"], "invalid_url");
        assert!(body.get("stack").is_none());
    }

    #[test]
    fn test_duplicate_body_names_short_code() {
        let err = AppError::DuplicateCode {
            code: "promo".to_string(),
        };

        let body = serde_json::to_value(err.to_error_body()).unwrap();
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(body["code"], "duplicate_code");
        assert_eq!(body["details"]["short_code"], "promo");
        assert!(body["details"].get("code").is_none());
    }

    #[test]
    fn test_response_carries_report_extension() {
        let response = AppError::internal("boom").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.body.message, "boom");
        assert!(report.stack.contains("Internal"));
    }
}
