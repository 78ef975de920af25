//! Technology Lookup Provider Port
//!
//! Port for the external technology service. Both operations forward the
//! correlation id unchanged and fail with a single
//! [`Error::TechnologyService`](crate::error::Error::TechnologyService) kind,
//! whatever went wrong (unreachable host, timeout, 4xx, 5xx). No retries.

use crate::entities::TechnologyId;
use crate::error::Result;
use crate::value_objects::{CorrelationId, TechnologySummary};
use async_trait::async_trait;
use std::collections::HashMap;

/// Technology Lookup Provider
///
/// # Implementations
///
/// - **Http**: calls the technology microservice
/// - **InMemory**: fixed catalog for development and tests
#[async_trait]
pub trait TechnologyLookupProvider: Send + Sync {
    /// Existence flag for every requested id
    ///
    /// This answer is authoritative for existence.
    async fn check_exist(
        &self,
        ids: &[TechnologyId],
        correlation_id: &CorrelationId,
    ) -> Result<HashMap<TechnologyId, bool>>;

    /// Summaries for the ids the service recognizes
    ///
    /// May return fewer entries than requested; unknown ids are skipped.
    async fn fetch_by_ids(
        &self,
        ids: &[TechnologyId],
        correlation_id: &CorrelationId,
    ) -> Result<Vec<TechnologySummary>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
