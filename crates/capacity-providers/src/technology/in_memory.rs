//! In-memory technology lookup provider
//!
//! Answers from a fixed catalog. Useful for development and testing where
//! the technology service is not running.

use async_trait::async_trait;
use capacity_domain::entities::TechnologyId;
use capacity_domain::error::Result;
use capacity_domain::ports::TechnologyLookupProvider;
use capacity_domain::value_objects::{CorrelationId, TechnologySummary};
use std::collections::HashMap;

/// In-memory technology lookup provider
#[derive(Debug, Clone, Default)]
pub struct InMemoryTechnologyProvider {
    catalog: HashMap<TechnologyId, String>,
}

impl InMemoryTechnologyProvider {
    /// Create a provider answering from the given technologies
    pub fn new<I: IntoIterator<Item = TechnologySummary>>(technologies: I) -> Self {
        Self {
            catalog: technologies
                .into_iter()
                .map(|technology| (technology.id, technology.name))
                .collect(),
        }
    }

    /// Number of technologies in the catalog
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

#[async_trait]
impl TechnologyLookupProvider for InMemoryTechnologyProvider {
    async fn check_exist(
        &self,
        ids: &[TechnologyId],
        _correlation_id: &CorrelationId,
    ) -> Result<HashMap<TechnologyId, bool>> {
        Ok(ids
            .iter()
            .map(|id| (*id, self.catalog.contains_key(id)))
            .collect())
    }

    async fn fetch_by_ids(
        &self,
        ids: &[TechnologyId],
        _correlation_id: &CorrelationId,
    ) -> Result<Vec<TechnologySummary>> {
        // Requested order, unknown ids skipped
        Ok(ids
            .iter()
            .filter_map(|id| {
                self.catalog
                    .get(id)
                    .map(|name| TechnologySummary::new(*id, name.clone()))
            })
            .collect())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
