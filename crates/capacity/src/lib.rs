//! # Capacity Service
//!
//! Manages capacities: named groups of technologies that are validated
//! against, and enriched from, a separate technology service.
//!
//! This crate is the public facade. It re-exports the layer crates and
//! provides the command line surface in [`cli`].
//!
//! ## Example
//!
//! ```ignore
//! use capacity::domain::entities::Capacity;
//! use capacity::domain::value_objects::CorrelationId;
//! use capacity::infrastructure::di::init_app;
//!
//! let context = init_app(config).await?;
//! let saved = context
//!     .capacity_service()
//!     .register_capacity(Capacity::new("Backend", "Server side", vec![1, 2, 3]), &CorrelationId::generate())
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, error taxonomy and ports
//! - `application` - the capacity orchestrator
//! - `providers` - repository and technology lookup adapters
//! - `infrastructure` - configuration, logging and wiring

/// Domain layer - core business logic and types
pub mod domain {
    pub use capacity_domain::*;
}

/// Application layer - use cases
pub mod application {
    pub use capacity_application::*;
}

/// Provider implementations
pub mod providers {
    pub use capacity_providers::*;
}

/// Infrastructure layer - config, logging and DI
pub mod infrastructure {
    pub use capacity_infrastructure::*;
}

pub mod cli;
