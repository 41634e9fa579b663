//! Validation of short link creation input.
//!
//! [`LinkDraft`] is the typed creation request. [`validate_draft`] runs every
//! rule and reports all violated fields at once.

use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;

/// Whole-string match against the code alphabet.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("code regex is valid"));

/// Codes that collide with service routes.
pub const RESERVED_CODES: &[&str] = &["url", "error", "health"];

/// Longest accepted code, explicit or generated.
pub const MAX_CODE_LENGTH: usize = 64;

/// Schemes a short link may redirect to.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Kind of rule a creation request broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    InvalidUrl,
    InvalidCode,
}

/// A single violated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

/// Candidate short link, trimmed but not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct LinkDraft {
    #[validate(custom(function = "validate_absolute_url"))]
    pub url: String,

    #[validate(custom(function = "validate_code_format"))]
    pub code: Option<String>,
}

impl LinkDraft {
    /// Builds a draft, trimming both fields.
    ///
    /// A present code that is blank after trimming stays present (and fails
    /// validation); only an absent code triggers generation.
    pub fn new(url: &str, code: Option<&str>) -> Self {
        Self {
            url: url.trim().to_string(),
            code: code.map(|c| c.trim().to_string()),
        }
    }
}

/// Returns `true` if `code` shadows a service route, ignoring case.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
}

/// Checks that `url` is an absolute http, https or ftp URL with a host.
fn validate_absolute_url(url: &str) -> Result<(), ValidationError> {
    match Url::parse(url) {
        Ok(parsed) if parsed.has_host() && ALLOWED_SCHEMES.contains(&parsed.scheme()) => Ok(()),
        _ => Err(violation(
            "invalid_url",
            "url must be an absolute http, https or ftp URL with a host",
        )),
    }
}

/// Checks that every character of `code` belongs to `[A-Za-z0-9_-]`.
fn validate_code_format(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(violation("invalid_code", "code must not be empty"));
    }

    if code.len() > MAX_CODE_LENGTH {
        return Err(violation(
            "invalid_code",
            "code must be at most 64 characters long",
        ));
    }

    if !CODE_REGEX.is_match(code) {
        return Err(violation(
            "invalid_code",
            "code may only contain letters, digits, '-' and '_'",
        ));
    }

    if is_reserved_code(code) {
        return Err(violation("invalid_code", "code is reserved"));
    }

    Ok(())
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Runs all rules against `draft`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every violated field, with the
/// individual messages joined into one human-readable message.
pub fn validate_draft(draft: &LinkDraft) -> Result<(), AppError> {
    draft.validate().map_err(into_app_error)
}

fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut found: Vec<(FieldViolation, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field_name: &'static str = if field == "code" {
                "code"
            } else {
                "url"
            };

            errs.iter()
                .map(|e| {
                    let kind = if e.code == "invalid_code" {
                        ViolationKind::InvalidCode
                    } else {
                        ViolationKind::InvalidUrl
                    };
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field_name} is invalid"));
                    (FieldViolation::new(field_name, kind), message)
                })
                .collect::<Vec<_>>()
        })
        .collect();

    found.sort_by_key(|(v, _)| v.kind);

    let message = found
        .iter()
        .map(|(_, m)| m.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    AppError::bad_request(message, found.into_iter().map(|(v, _)| v).collect())
}
