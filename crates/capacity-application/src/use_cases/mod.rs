//! Use Case Implementations
//!
//! | Use case | Interface |
//! |----------|-----------|
//! | [`CapacityServiceImpl`] | [`CapacityServiceInterface`](crate::ports::CapacityServiceInterface) |

pub mod capacity_service;

pub use capacity_service::CapacityServiceImpl;
