//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::CreatedLink;
use crate::domain::entities::ShortLink;
use crate::utils::validation::LinkDraft;

/// Request to create a short link.
///
/// A missing `url` deserializes to an empty string so it is reported as an
/// invalid URL rather than a body parse failure.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub url: String,

    /// Optional explicit code; generated when absent or `null`.
    #[serde(default)]
    pub code: Option<String>,
}

impl CreateLinkRequest {
    pub fn into_draft(self) -> LinkDraft {
        LinkDraft::new(&self.url, self.code.as_deref())
    }
}

/// Stored record fields plus the public short link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    #[serde(flatten)]
    pub record: ShortLink,
    pub link: String,
}

impl From<CreatedLink> for CreateLinkResponse {
    fn from(created: CreatedLink) -> Self {
        Self {
            record: created.link,
            link: created.short_url,
        }
    }
}
