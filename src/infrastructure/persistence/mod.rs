//! Mapping Store implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryLinkRepository`] - In-process ordered index
//!
//! [`connect`] picks one from the configured connection string.

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domain::repositories::LinkRepository;

/// Connection string prefix selecting [`MemoryLinkRepository`].
pub const MEMORY_SCHEME: &str = "memory://";

/// Store handle built once at startup.
///
/// Holds the pool (when there is one) so the server can close it on shutdown.
pub struct Store {
    pub repository: Arc<dyn LinkRepository>,
    pub pool: Option<PgPool>,
}

impl Store {
    /// Releases backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }
}

/// Opens the store described by `config.database_url` and applies migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn connect(config: &Config) -> Result<Store> {
    if config.database_url.starts_with(MEMORY_SCHEME) {
        tracing::warn!("Using in-memory store; links are lost on restart");
        return Ok(Store {
            repository: Arc::new(MemoryLinkRepository::new()),
            pool: None,
        });
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(Store {
        repository: Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))),
        pool: Some(pool),
    })
}
