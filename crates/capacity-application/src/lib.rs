//! Application Layer - Capacity Service
//!
//! Use cases that orchestrate the domain rules with the persistence and
//! technology lookup ports.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains use case implementations (application services)
//! - Defines the service port consumed by outer surfaces
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Use Cases
//!
//! - Capacity registration with local and remote validation
//! - Batch existence checks by capacity id
//! - Paginated listing enriched with technology summaries
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `capacity-domain`: entities, value objects, error taxonomy and ports
//! - `tokio`, `tracing` and `async-trait`

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
