//! In-memory capacity repository
//!
//! Keeps capacities and their technology links in process memory, ordered
//! the same way as the PostgreSQL repository. Data is lost on restart.

use crate::constants::REPOSITORY_PROVIDER_MEMORY;
use async_trait::async_trait;
use capacity_domain::entities::{Capacity, CapacityId, TechnologyId};
use capacity_domain::error::{Error, Result};
use capacity_domain::repositories::CapacityRepository;
use capacity_domain::value_objects::{PaginationRequest, SortDirection, SortField};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredCapacity {
    name: String,
    description: String,
    technology_ids: Vec<TechnologyId>,
}

#[derive(Debug, Default)]
struct State {
    last_id: CapacityId,
    capacities: BTreeMap<CapacityId, StoredCapacity>,
}

/// In-memory capacity repository
///
/// A single lock guards rows and links, so `save` is atomic.
pub struct InMemoryCapacityRepository {
    state: RwLock<State>,
}

impl InMemoryCapacityRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }
}

impl Default for InMemoryCapacityRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Row comparison for the requested sort
fn compare(
    (a_name, a_count): (&str, usize),
    (b_name, b_count): (&str, usize),
    sort_by: SortField,
    direction: SortDirection,
) -> Ordering {
    let directed = |ordering: Ordering| match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };
    match sort_by {
        SortField::Name => directed(a_name.cmp(b_name)),
        // Ties always by name ascending
        SortField::TechnologyCount => directed(a_count.cmp(&b_count)).then_with(|| a_name.cmp(b_name)),
    }
}

#[async_trait]
impl CapacityRepository for InMemoryCapacityRepository {
    async fn save(&self, capacity: &Capacity) -> Result<Capacity> {
        let mut state = self.state.write().await;

        if state.capacities.values().any(|stored| stored.name == capacity.name) {
            return Err(Error::database(format!(
                "Unique constraint violated: capacity name '{}' already stored",
                capacity.name
            )));
        }

        state.last_id += 1;
        let id = state.last_id;
        state.capacities.insert(
            id,
            StoredCapacity {
                name: capacity.name.clone(),
                description: capacity.description.clone(),
                technology_ids: capacity.technology_ids.clone(),
            },
        );

        Ok(capacity.clone().with_id(id))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state.capacities.values().any(|stored| stored.name == name))
    }

    async fn find_existing_ids(&self, ids: &[CapacityId]) -> Result<Vec<CapacityId>> {
        let state = self.state.read().await;
        let mut seen = HashSet::new();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| state.capacities.contains_key(id) && seen.insert(*id))
            .collect())
    }

    async fn find_page(&self, pagination: &PaginationRequest) -> Result<Vec<Capacity>> {
        let state = self.state.read().await;

        let mut rows: Vec<(&CapacityId, &StoredCapacity)> = state.capacities.iter().collect();
        rows.sort_by(|(_, a), (_, b)| {
            compare(
                (a.name.as_str(), a.technology_ids.len()),
                (b.name.as_str(), b.technology_ids.len()),
                pagination.sort_by(),
                pagination.sort_direction(),
            )
        });

        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .skip(offset)
            .take(pagination.size() as usize)
            .map(|(id, stored)| {
                Capacity::new(stored.name.clone(), stored.description.clone(), Vec::new())
                    .with_id(*id)
            })
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        let state = self.state.read().await;
        Ok(state.capacities.len() as u64)
    }

    async fn find_technology_ids(&self, capacity_id: CapacityId) -> Result<Vec<TechnologyId>> {
        let state = self.state.read().await;
        Ok(state
            .capacities
            .get(&capacity_id)
            .map(|stored| stored.technology_ids.clone())
            .unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        REPOSITORY_PROVIDER_MEMORY
    }
}
