//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, Resolver};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::CodeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub resolver: Arc<Resolver>,
    /// Hides error diagnostics in responses when true.
    pub production: bool,
}

impl AppState {
    /// Wires services around one store handle.
    pub fn new(repository: Arc<dyn LinkRepository>, config: &Config) -> Self {
        let link_service = LinkService::new(
            repository.clone(),
            CodeGenerator::new(config.code_length),
            config.base_url.clone(),
            config.store_timeout(),
        );
        let resolver = Resolver::new(
            repository,
            config.fallback_url.clone(),
            config.store_timeout(),
        );

        Self {
            link_service: Arc::new(link_service),
            resolver: Arc::new(resolver),
            production: config.production,
        }
    }
}
