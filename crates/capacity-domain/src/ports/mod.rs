//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external services.
//! High-level modules define the interfaces; providers implement them.
//!
//! - **providers/** - External service provider ports (technology lookup)

/// External service provider ports
pub mod providers;

pub use providers::TechnologyLookupProvider;
