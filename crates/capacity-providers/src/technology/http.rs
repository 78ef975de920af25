//! HTTP Technology Lookup Provider
//!
//! Implements the `TechnologyLookupProvider` port against the technology
//! microservice. Both endpoints take `{"ids": [...]}` and receive the
//! correlation id in the `x-message-id` header.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;

use capacity_domain::entities::TechnologyId;
use capacity_domain::error::Result;
use capacity_domain::ports::TechnologyLookupProvider;
use capacity_domain::value_objects::{CorrelationId, TechnologySummary};
use tracing::debug;

use crate::constants::{
    CONTENT_TYPE_JSON, TECHNOLOGY_BY_IDS_PATH, TECHNOLOGY_CHECK_EXISTS_PATH, X_MESSAGE_ID_HEADER,
};
use crate::utils::HttpResponseUtils;

#[derive(Serialize)]
struct IdsRequest<'a> {
    ids: &'a [TechnologyId],
}

/// HTTP technology lookup provider
///
/// Receives the HTTP client via constructor injection so the connection
/// pool is shared across providers.
///
/// ## Example
///
/// ```rust,no_run
/// use capacity_providers::http::HttpClientConfig;
/// use capacity_providers::technology::HttpTechnologyProvider;
///
/// fn example() -> capacity_providers::Result<()> {
///     let client = HttpClientConfig::default().build_client()?;
///     let provider = HttpTechnologyProvider::new("http://localhost:8081", client);
///     Ok(())
/// }
/// ```
pub struct HttpTechnologyProvider {
    base_url: String,
    http_client: Client,
}

impl HttpTechnologyProvider {
    /// Create a new HTTP technology provider
    ///
    /// # Arguments
    /// * `base_url` - Technology service URL (e.g., "http://localhost:8081")
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new<S: Into<String>>(base_url: S, http_client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    /// Base URL of the technology service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_ids<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        ids: &[TechnologyId],
        correlation_id: &CorrelationId,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url.trim_end_matches('/'));
        debug!(
            correlation_id = %correlation_id,
            url = %url,
            ids = ids.len(),
            "Calling technology service"
        );

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header(X_MESSAGE_ID_HEADER, correlation_id.as_str())
            .json(&IdsRequest { ids })
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(path, e))?;

        HttpResponseUtils::check_and_parse(response, path).await
    }
}

#[async_trait]
impl TechnologyLookupProvider for HttpTechnologyProvider {
    async fn check_exist(
        &self,
        ids: &[TechnologyId],
        correlation_id: &CorrelationId,
    ) -> Result<HashMap<TechnologyId, bool>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        // JSON object keys are id strings; serde_json parses them as integers
        self.post_ids(TECHNOLOGY_CHECK_EXISTS_PATH, ids, correlation_id)
            .await
    }

    async fn fetch_by_ids(
        &self,
        ids: &[TechnologyId],
        correlation_id: &CorrelationId,
    ) -> Result<Vec<TechnologySummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.post_ids(TECHNOLOGY_BY_IDS_PATH, ids, correlation_id)
            .await
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
