//! Application Service Port Interfaces
//!
//! Contracts implemented by the application services and consumed by the
//! outer surfaces (CLI, HTTP handlers).

use async_trait::async_trait;
use capacity_domain::entities::{Capacity, CapacityId};
use capacity_domain::error::Result;
use capacity_domain::value_objects::{
    CapacityWithTechnologies, CorrelationId, Page, PaginationRequest,
};
use std::collections::HashMap;

// ============================================================================
// Capacity Service Interface
// ============================================================================

/// Capacity Service Interface
///
/// Every operation takes the caller's correlation id, which is forwarded to
/// the technology service and attached to log events.
#[async_trait]
pub trait CapacityServiceInterface: Send + Sync {
    /// Validate and persist a new capacity
    ///
    /// Local rules are checked first (see
    /// [`Capacity::validate`](capacity_domain::entities::Capacity::validate)),
    /// then technology existence, then name uniqueness.
    ///
    /// # Returns
    /// The persisted capacity with its assigned id
    async fn register_capacity(
        &self,
        capacity: Capacity,
        correlation_id: &CorrelationId,
    ) -> Result<Capacity>;

    /// Existence flag for every requested capacity id
    ///
    /// The result has exactly one entry per distinct requested id.
    async fn check_capacities_exist(
        &self,
        ids: &[CapacityId],
        correlation_id: &CorrelationId,
    ) -> Result<HashMap<CapacityId, bool>>;

    /// One page of capacities with their technologies resolved
    async fn list_capacities(
        &self,
        pagination: PaginationRequest,
        correlation_id: &CorrelationId,
    ) -> Result<Page<CapacityWithTechnologies>>;
}
