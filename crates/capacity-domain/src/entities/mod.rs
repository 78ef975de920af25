//! Domain entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Capacity`] | Named bundle of distinct technology references |

/// Capacity aggregate
pub mod capacity;

pub use capacity::{Capacity, CapacityId, TechnologyId};
