//! Code to redirect target resolution.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::deadline::with_deadline;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Where a resolved code sends the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The stored destination for a known code.
    Stored(String),
    /// The configured fallback for an unknown code.
    Fallback(String),
}

impl RedirectTarget {
    pub fn location(&self) -> &str {
        match self {
            RedirectTarget::Stored(url) | RedirectTarget::Fallback(url) => url,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RedirectTarget::Fallback(_))
    }
}

/// Read path turning a code into a redirect decision.
///
/// A miss is a normal outcome and degrades to the fallback location.
pub struct Resolver {
    repository: Arc<dyn LinkRepository>,
    fallback_url: String,
    store_timeout: Duration,
}

impl Resolver {
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        fallback_url: String,
        store_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            fallback_url,
            store_timeout,
        }
    }

    /// Resolves `code` (case-insensitive) to a redirect target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] only when the store fails or
    /// times out. Unknown codes are never an error.
    pub async fn resolve(&self, code: &str) -> Result<RedirectTarget, AppError> {
        let code = code.to_lowercase();

        let found = with_deadline(self.store_timeout, self.repository.find_by_code(&code)).await?;

        Ok(match found {
            Some(link) => RedirectTarget::Stored(link.target_url),
            None => {
                tracing::debug!(%code, "Unknown code, redirecting to fallback");
                RedirectTarget::Fallback(self.fallback_url.clone())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortLink;
    use crate::domain::repositories::{MockLinkRepository, StoreError};
    use chrono::Utc;

    const FALLBACK: &str = "https://short.example/error";

    fn resolver(repo: MockLinkRepository) -> Resolver {
        Resolver::new(
            Arc::new(repo),
            FALLBACK.to_string(),
            Duration::from_millis(200),
        )
    }

    #[tokio::test]
    async fn test_resolve_known_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "ab3f9")
            .times(1)
            .returning(|code| {
                Ok(Some(ShortLink::new(
                    code.to_string(),
                    "https://example.com".to_string(),
                    Utc::now(),
                )))
            });

        let target = resolver(mock_repo).resolve("ab3f9").await.unwrap();

        assert_eq!(target, RedirectTarget::Stored("https://example.com".to_string()));
        assert!(!target.is_fallback());
    }

    #[tokio::test]
    async fn test_resolve_normalizes_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "promo")
            .times(1)
            .returning(|_| Ok(None));

        let target = resolver(mock_repo).resolve("PrOmO").await.unwrap();
        assert!(target.is_fallback());
    }

    #[tokio::test]
    async fn test_resolve_miss_returns_fallback() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let target = resolver(mock_repo).resolve("nothere").await.unwrap();

        assert_eq!(target.location(), FALLBACK);
    }

    #[tokio::test]
    async fn test_resolve_store_failure_is_error() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("timeout".to_string())));

        let err = resolver(mock_repo).resolve("abc").await.unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable { .. }));
    }
}
