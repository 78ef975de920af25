//! Value Objects
//!
//! Immutable types without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`PaginationRequest`] | Normalized page/size/sort parameters |
//! | [`Page`] | Slice of an ordered result set plus position metadata |
//! | [`TechnologySummary`] | Read-only projection of an external technology |
//! | [`CapacityWithTechnologies`] | Listing view of a capacity with resolved technologies |
//! | [`CorrelationId`] | Caller-supplied id forwarded for cross-service tracing |

/// Correlation identifiers
pub mod correlation;
/// Result pages
pub mod page;
/// Pagination parameters
pub mod pagination;
/// Technology projections
pub mod technology;

pub use correlation::CorrelationId;
pub use page::Page;
pub use pagination::{PaginationRequest, SortDirection, SortField};
pub use technology::{CapacityWithTechnologies, TechnologySummary};
