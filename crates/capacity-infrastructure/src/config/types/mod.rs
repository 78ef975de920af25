//! Configuration types module

pub mod app;
pub mod logging;
pub mod repository;
pub mod technology;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use repository::{DatabaseConfig, RepositoryConfig, RepositoryProvider};
pub use technology::{TechnologyProvider, TechnologyServiceConfig};
