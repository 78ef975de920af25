//! Repository Interfaces
//!
//! Interfaces for data persistence and retrieval operations.
//! Repositories abstract the storage of domain entities, providing a consistent
//! interface regardless of the underlying storage technology.
//!
//! ## Repositories
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`CapacityRepository`] | Persistence of capacities and their technology links |

/// Capacity repository interface
pub mod capacity_repository;

pub use capacity_repository::CapacityRepository;
