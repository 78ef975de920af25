//! Configuration management
//!
//! Typed application configuration and its Figment-based loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, DatabaseConfig, LoggingConfig, RepositoryConfig, RepositoryProvider,
    TechnologyProvider, TechnologyServiceConfig,
};
