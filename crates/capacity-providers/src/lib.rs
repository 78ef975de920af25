//! # Capacity Service - Provider Implementations
//!
//! Adapters for the ports defined in `capacity-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Repository | `CapacityRepository` | InMemory, Postgres |
//! | Technology lookup | `TechnologyLookupProvider` | Http, InMemory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! capacity-providers = { version = "0.1", default-features = false, features = [] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use capacity_providers::repository::InMemoryCapacityRepository;
//! use capacity_providers::technology::HttpTechnologyProvider;
//! ```

// Re-export capacity-domain types commonly used with providers
pub use capacity_domain::error::{Error, Result};
pub use capacity_domain::ports::TechnologyLookupProvider;
pub use capacity_domain::repositories::CapacityRepository;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration
pub mod http;

/// Capacity repository implementations
///
/// Implements `CapacityRepository` over memory or PostgreSQL.
pub mod repository;

/// Technology lookup implementations
///
/// Implements `TechnologyLookupProvider` over HTTP or a fixed catalog.
pub mod technology;
