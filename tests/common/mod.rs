#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use smol_url::config::Config;
use smol_url::domain::entities::{NewShortLink, ShortLink};
use smol_url::domain::repositories::{LinkRepository, StoreError};
use smol_url::infrastructure::persistence::MemoryLinkRepository;
use smol_url::routes::api_router;
use smol_url::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "https://short.example/";
pub const FALLBACK_URL: &str = "https://short.example/error";

pub fn test_config(production: bool) -> Config {
    Config {
        database_url: "memory://".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        base_url: BASE_URL.to_string(),
        fallback_url: FALLBACK_URL.to_string(),
        production,
        code_length: 5,
        store_timeout_ms: 1_000,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        db_max_connections: 1,
        db_connect_timeout: 1,
    }
}

pub fn create_test_state(production: bool) -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), &test_config(production));
    (state, repo)
}

pub fn create_test_server(production: bool) -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state(production);
    let server = TestServer::new(api_router(state)).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) -> ShortLink {
    repo.insert(NewShortLink {
        code: code.to_string(),
        target_url: url.to_string(),
    })
    .await
    .unwrap()
}

/// Store whose calls never complete.
pub struct StalledRepository;

#[async_trait]
impl LinkRepository for StalledRepository {
    async fn insert(&self, _new_link: NewShortLink) -> Result<ShortLink, StoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(StoreError::Unavailable("unreachable".to_string()))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<ShortLink>, StoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}

pub fn create_stalled_server() -> TestServer {
    let mut config = test_config(false);
    config.store_timeout_ms = 50;
    let state = AppState::new(Arc::new(StalledRepository), &config);
    TestServer::new(api_router(state)).unwrap()
}
