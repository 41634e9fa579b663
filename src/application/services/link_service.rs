//! Short link creation workflow.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::deadline::with_deadline;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::validation::{LinkDraft, is_reserved_code, validate_draft};

/// A freshly created short link plus its public URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: ShortLink,
    pub short_url: String,
}

/// Service for creating and looking up short links.
///
/// Runs validate → generate (when no code is given) → lowercase → insert.
/// There is no lookup before the insert; the store's unique constraint
/// decides between racing requests.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: CodeGenerator,
    base_url: String,
    store_timeout: Duration,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` must end with `/`; it is prefixed to codes to build links.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        generator: CodeGenerator,
        base_url: String,
        store_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url,
            store_timeout,
        }
    }

    /// Creates a short link from an untrusted draft.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or code is invalid.
    ///
    /// Returns [`AppError::DuplicateCode`] if the code is already in use, or
    /// if a generated code happens to be a reserved route name. The store's
    /// own message is not exposed.
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store fails or times out.
    pub async fn create_short_link(&self, draft: LinkDraft) -> Result<CreatedLink, AppError> {
        validate_draft(&draft)?;

        let code = match draft.code {
            Some(code) => code.to_lowercase(),
            None => {
                let code = self.generator.generate();
                if is_reserved_code(&code) {
                    tracing::debug!(%code, "Generated code is reserved");
                    return Err(AppError::DuplicateCode { code });
                }
                code
            }
        };

        let new_link = NewShortLink {
            code,
            target_url: draft.url,
        };

        let insert = self.repository.insert(new_link);
        match with_deadline(self.store_timeout, insert).await {
            Ok(link) => {
                tracing::info!(code = %link.code, "Short link created");
                let short_url = link.link(&self.base_url);
                Ok(CreatedLink { link, short_url })
            }
            Err(StoreError::DuplicateCode { code, detail }) => {
                tracing::debug!(%code, %detail, "Code already in use");
                Err(AppError::DuplicateCode { code })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a link by code (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::StoreUnavailable`] on store failures.
    pub async fn get_link_by_code(&self, code: &str) -> Result<ShortLink, AppError> {
        let code = code.to_lowercase();

        with_deadline(self.store_timeout, self.repository.find_by_code(&code))
            .await?
            .ok_or_else(|| AppError::not_found(format!("no short link for code `{code}`")))
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failures.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        Ok(with_deadline(self.store_timeout, self.repository.count()).await?)
    }

    /// Probes the store within the configured deadline.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the probe fails.
    pub async fn check_store(&self) -> Result<(), AppError> {
        Ok(with_deadline(self.store_timeout, self.repository.ping()).await?)
    }

    /// Builds the public URL for `code`.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}
