//! Short link entity representing a code to URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted mapping between a short code and its destination.
///
/// Both fields are fixed at creation; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortLink {
    pub code: String,
    #[serde(rename = "url")]
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target_url,
            created_at,
        }
    }

    /// Builds the public short link by appending the code to `base_url`.
    ///
    /// `base_url` is expected to end with `/` (see [`crate::config::Config`]).
    pub fn link(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.code)
    }
}

/// Input data for inserting a new short link.
///
/// The code must already be validated and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub code: String,
    pub target_url: String,
}
