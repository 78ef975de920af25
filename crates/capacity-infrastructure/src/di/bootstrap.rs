//! Application Bootstrap
//!
//! Resolves the configured providers and builds the capacity service.
//!
//! ```text
//! AppConfig → repository + technology provider → CapacityServiceImpl
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let page = context
//!     .capacity_service()
//!     .list_capacities(PaginationRequest::default(), &CorrelationId::generate())
//!     .await?;
//! ```

use crate::config::{
    AppConfig, RepositoryConfig, RepositoryProvider, TechnologyProvider, TechnologyServiceConfig,
};
use capacity_application::ports::CapacityServiceInterface;
use capacity_application::use_cases::CapacityServiceImpl;
use capacity_domain::error::{Error, Result};
use capacity_domain::ports::TechnologyLookupProvider;
use capacity_domain::repositories::CapacityRepository;
use capacity_providers::http::HttpClientConfig;
use capacity_providers::repository::{
    InMemoryCapacityRepository, PostgresCapacityRepository, PostgresPoolConfig,
};
use capacity_providers::technology::{HttpTechnologyProvider, InMemoryTechnologyProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Application context holding the wired providers and services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    repository: Arc<dyn CapacityRepository>,
    technology_provider: Arc<dyn TechnologyLookupProvider>,
    capacity_service: Arc<dyn CapacityServiceInterface>,
}

impl AppContext {
    /// Capacity orchestrator
    pub fn capacity_service(&self) -> Arc<dyn CapacityServiceInterface> {
        Arc::clone(&self.capacity_service)
    }

    /// Resolved capacity repository
    pub fn repository(&self) -> Arc<dyn CapacityRepository> {
        Arc::clone(&self.repository)
    }

    /// Resolved technology lookup provider
    pub fn technology_provider(&self) -> Arc<dyn TechnologyLookupProvider> {
        Arc::clone(&self.technology_provider)
    }
}

/// Build the application context from configuration
///
/// For the postgres repository this opens the pool and creates missing
/// tables before returning.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let repository = resolve_repository(&config.repository).await?;
    let technology_provider = resolve_technology_provider(&config.technology_service)?;

    info!(
        repository = repository.provider_name(),
        technology = technology_provider.provider_name(),
        "Resolved providers"
    );

    let capacity_service: Arc<dyn CapacityServiceInterface> = Arc::new(CapacityServiceImpl::new(
        Arc::clone(&repository),
        Arc::clone(&technology_provider),
    ));

    Ok(AppContext {
        config: Arc::new(config),
        repository,
        technology_provider,
        capacity_service,
    })
}

/// Context with in-memory providers only
pub async fn init_test_app() -> Result<AppContext> {
    let mut config = AppConfig::default();
    config.repository.provider = RepositoryProvider::Memory;
    config.technology_service.provider = TechnologyProvider::Memory;
    init_app(config).await
}

async fn resolve_repository(config: &RepositoryConfig) -> Result<Arc<dyn CapacityRepository>> {
    match config.provider {
        RepositoryProvider::Memory => Ok(Arc::new(InMemoryCapacityRepository::new())),
        RepositoryProvider::Postgres => {
            let pool_config = PostgresPoolConfig {
                url: config.database.url.clone(),
                max_connections: config.database.max_connections,
                min_idle: config.database.min_idle,
                connection_timeout: Duration::from_secs(config.database.connection_timeout_secs),
            };
            // Pool construction opens connections synchronously
            let repository =
                tokio::task::spawn_blocking(move || PostgresCapacityRepository::connect(&pool_config))
                    .await
                    .map_err(|e| Error::internal(format!("Database pool task failed: {e}")))??;
            repository.ensure_schema().await?;
            Ok(Arc::new(repository))
        }
    }
}

fn resolve_technology_provider(
    config: &TechnologyServiceConfig,
) -> Result<Arc<dyn TechnologyLookupProvider>> {
    match config.provider {
        TechnologyProvider::Http => {
            let client = HttpClientConfig {
                max_idle_per_host: config.max_idle_per_host,
                timeout: Duration::from_secs(config.timeout_secs),
                ..HttpClientConfig::default()
            }
            .build_client()?;
            Ok(Arc::new(HttpTechnologyProvider::new(
                config.base_url.clone(),
                client,
            )))
        }
        TechnologyProvider::Memory => Ok(Arc::new(InMemoryTechnologyProvider::new(
            config.catalog.iter().cloned(),
        ))),
    }
}
