//! Capacity Repository Interface
//!
//! Persistence port for capacities. Each operation is atomic on its own;
//! callers must not assume any transaction spanning two calls.

use crate::entities::{Capacity, CapacityId, TechnologyId};
use crate::error::Result;
use crate::value_objects::PaginationRequest;
use async_trait::async_trait;

/// Repository: Capacity persistence
///
/// Storage layout expected by implementations:
///
/// ```text
/// capacity(id, name UNIQUE, description)
/// capacity_technology(capacity_id, technology_id)   -- one row per link
/// ```
///
/// # Example
///
/// ```ignore
/// use capacity_domain::repositories::CapacityRepository;
///
/// if !repo.exists_by_name(&capacity.name).await? {
///     let saved = repo.save(&capacity).await?;
///     println!("saved with id {:?}", saved.id);
/// }
/// ```
#[async_trait]
pub trait CapacityRepository: Send + Sync {
    /// Persist a capacity and one link row per technology id
    ///
    /// # Returns
    /// The stored capacity with its assigned id and the same technology ids
    async fn save(&self, capacity: &Capacity) -> Result<Capacity>;

    /// Whether a capacity with exactly this name is stored
    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    /// Subset of `ids` that belong to stored capacities
    async fn find_existing_ids(&self, ids: &[CapacityId]) -> Result<Vec<CapacityId>>;

    /// One page of capacities ordered per the request
    ///
    /// Sorting by technology count breaks ties by name ascending. The
    /// returned capacities carry no technology ids; use
    /// [`find_technology_ids`](Self::find_technology_ids) for those.
    async fn find_page(&self, pagination: &PaginationRequest) -> Result<Vec<Capacity>>;

    /// Total number of stored capacities
    async fn count(&self) -> Result<u64>;

    /// Technology ids linked to a capacity (empty when none or unknown)
    async fn find_technology_ids(&self, capacity_id: CapacityId) -> Result<Vec<TechnologyId>>;

    /// Get the name/identifier of this repository implementation
    fn provider_name(&self) -> &str;
}
