//! Application Port Interfaces
//!
//! - **services** - service interfaces implemented by the use cases

/// Application service interfaces
pub mod services;

pub use services::CapacityServiceInterface;
