//! Capacity Repository Implementations
//!
//! | Repository | Feature | Description |
//! |------------|---------|-------------|
//! | [`InMemoryCapacityRepository`] | - | Process-local storage for development and tests |
//! | [`PostgresCapacityRepository`] | `repository-postgres` | PostgreSQL via an r2d2 pool |

pub mod in_memory;
#[cfg(feature = "repository-postgres")]
pub mod postgres;

pub use in_memory::InMemoryCapacityRepository;
#[cfg(feature = "repository-postgres")]
pub use postgres::{PostgresCapacityRepository, PostgresPoolConfig};
