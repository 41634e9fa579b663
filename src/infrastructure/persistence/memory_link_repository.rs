//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// Ordered in-memory index of short links.
///
/// The existence check and the insert happen under one write guard, which is
/// the in-process equivalent of a unique constraint. Data does not survive a
/// restart; selected with `DATABASE_URL=memory://`.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<BTreeMap<String, ShortLink>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, StoreError> {
        let mut links = self.links.write().await;

        match links.entry(new_link.code) {
            Entry::Occupied(entry) => Err(StoreError::DuplicateCode {
                code: entry.key().clone(),
                detail: "key already present in index".to_string(),
            }),
            Entry::Vacant(entry) => {
                let link = ShortLink::new(entry.key().clone(), new_link.target_url, Utc::now());
                Ok(entry.insert(link).clone())
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.links.read().await.len() as i64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
