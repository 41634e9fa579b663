//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use async_trait::async_trait;

/// Failures reported by a [`LinkRepository`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The unique constraint on `code` rejected the insert.
    ///
    /// Carries the backend's raw message; callers are expected to replace it
    /// before anything reaches a user.
    #[error("duplicate code `{code}`: {detail}")]
    DuplicateCode { code: String, detail: String },

    /// The backend could not be reached or did not answer in time.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Mapping Store interface for short links.
///
/// Implementations own the uniqueness constraint on `code`: when two inserts
/// race on the same code exactly one succeeds and the other reports
/// [`StoreError::DuplicateCode`]. Callers never pre-check with a lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process ordered index
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the code already exists.
    ///
    /// Returns [`StoreError::Unavailable`] if the backend fails.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, StoreError>;

    /// Finds a link by its (already normalized) code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend fails.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend fails.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Cheap round trip used by the health probe.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend fails.
    async fn ping(&self) -> Result<(), StoreError>;
}
