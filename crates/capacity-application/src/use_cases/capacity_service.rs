//! Capacity Service Use Case
//!
//! Orchestrates capacity registration, existence checks and enriched listing
//! over the repository and technology lookup ports.

use crate::ports::services::CapacityServiceInterface;
use capacity_domain::entities::{Capacity, CapacityId};
use capacity_domain::error::{Error, ErrorKind, Result, ValidationError};
use capacity_domain::ports::TechnologyLookupProvider;
use capacity_domain::repositories::CapacityRepository;
use capacity_domain::value_objects::{
    CapacityWithTechnologies, CorrelationId, Page, PaginationRequest,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Log a failed operation at the level matching its kind
fn log_failure<T>(operation: &str, correlation_id: &CorrelationId, result: &Result<T>) {
    let Err(err) = result else {
        return;
    };
    match err.kind() {
        ErrorKind::Validation => debug!(
            correlation_id = %correlation_id,
            operation,
            code = err.validation().map_or("INVALID_ARGUMENT", |v| v.code()),
            "Request rejected"
        ),
        ErrorKind::Upstream => warn!(
            correlation_id = %correlation_id,
            operation,
            error = %err,
            "Technology service call failed"
        ),
        ErrorKind::Unexpected => error!(
            correlation_id = %correlation_id,
            operation,
            error = %err,
            "Unexpected failure"
        ),
    }
}

/// Capacity service implementation - coordinates validation, persistence and enrichment
pub struct CapacityServiceImpl {
    repository: Arc<dyn CapacityRepository>,
    technology_provider: Arc<dyn TechnologyLookupProvider>,
}

impl CapacityServiceImpl {
    /// Create new capacity service with injected dependencies
    pub fn new(
        repository: Arc<dyn CapacityRepository>,
        technology_provider: Arc<dyn TechnologyLookupProvider>,
    ) -> Self {
        Self {
            repository,
            technology_provider,
        }
    }

    async fn register(&self, capacity: Capacity, correlation_id: &CorrelationId) -> Result<Capacity> {
        capacity.validate()?;

        let existence = self
            .technology_provider
            .check_exist(&capacity.technology_ids, correlation_id)
            .await?;
        // An id left out of the answer counts as unknown
        let all_exist = capacity
            .technology_ids
            .iter()
            .all(|id| existence.get(id).copied().unwrap_or(false));
        if !all_exist {
            return Err(ValidationError::TechnologiesNotFound.into());
        }

        if self.repository.exists_by_name(&capacity.name).await? {
            return Err(ValidationError::NameAlreadyExists.into());
        }

        self.repository.save(&capacity).await
    }

    async fn check_exist(&self, ids: &[CapacityId]) -> Result<HashMap<CapacityId, bool>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let found = self.repository.find_existing_ids(ids).await?;

        let mut existence: HashMap<CapacityId, bool> = ids.iter().map(|id| (*id, false)).collect();
        for id in found {
            if let Some(flag) = existence.get_mut(&id) {
                *flag = true;
            }
        }
        Ok(existence)
    }

    async fn list(
        &self,
        pagination: &PaginationRequest,
        correlation_id: &CorrelationId,
    ) -> Result<Page<CapacityWithTechnologies>> {
        let (total, rows) = tokio::try_join!(
            self.repository.count(),
            self.repository.find_page(pagination)
        )?;

        if rows.is_empty() {
            return Ok(Page::empty(pagination.page(), pagination.size(), total));
        }

        // Row order is the output order
        let mut content = Vec::with_capacity(rows.len());
        for capacity in rows {
            content.push(self.enrich(capacity, correlation_id).await?);
        }

        Ok(Page::of(content, pagination.page(), pagination.size(), total))
    }

    async fn enrich(
        &self,
        capacity: Capacity,
        correlation_id: &CorrelationId,
    ) -> Result<CapacityWithTechnologies> {
        let id = capacity
            .id
            .ok_or_else(|| Error::internal(format!("Listed capacity '{}' has no id", capacity.name)))?;

        let technology_ids = self.repository.find_technology_ids(id).await?;
        let technologies = if technology_ids.is_empty() {
            Vec::new()
        } else {
            self.technology_provider
                .fetch_by_ids(&technology_ids, correlation_id)
                .await?
        };

        Ok(CapacityWithTechnologies {
            id,
            name: capacity.name,
            description: capacity.description,
            technologies,
        })
    }
}

#[async_trait::async_trait]
impl CapacityServiceInterface for CapacityServiceImpl {
    async fn register_capacity(
        &self,
        capacity: Capacity,
        correlation_id: &CorrelationId,
    ) -> Result<Capacity> {
        debug!(
            correlation_id = %correlation_id,
            name = %capacity.name,
            technologies = capacity.technology_ids.len(),
            "Registering capacity"
        );

        let result = self.register(capacity, correlation_id).await;
        if let Ok(saved) = &result {
            info!(
                correlation_id = %correlation_id,
                capacity_id = ?saved.id,
                name = %saved.name,
                "Capacity registered"
            );
        }
        log_failure("register_capacity", correlation_id, &result);
        result
    }

    async fn check_capacities_exist(
        &self,
        ids: &[CapacityId],
        correlation_id: &CorrelationId,
    ) -> Result<HashMap<CapacityId, bool>> {
        debug!(correlation_id = %correlation_id, requested = ids.len(), "Checking capacities");

        let result = self.check_exist(ids).await;
        log_failure("check_capacities_exist", correlation_id, &result);
        result
    }

    async fn list_capacities(
        &self,
        pagination: PaginationRequest,
        correlation_id: &CorrelationId,
    ) -> Result<Page<CapacityWithTechnologies>> {
        debug!(
            correlation_id = %correlation_id,
            page = pagination.page(),
            size = pagination.size(),
            sort_by = %pagination.sort_by(),
            sort_direction = %pagination.sort_direction(),
            "Listing capacities"
        );

        let result = self.list(&pagination, correlation_id).await;
        if let Ok(page) = &result {
            debug!(
                correlation_id = %correlation_id,
                returned = page.content().len(),
                total_elements = page.total_elements(),
                "Capacities listed"
            );
        }
        log_failure("list_capacities", correlation_id, &result);
        result
    }
}
