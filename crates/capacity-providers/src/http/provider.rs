//! HTTP Client Settings
//!
//! Pooling and timeout settings for the shared reqwest client.

use crate::constants::{
    HTTP_DEFAULT_IDLE_TIMEOUT_SECS, HTTP_DEFAULT_KEEPALIVE_SECS, HTTP_DEFAULT_MAX_IDLE_PER_HOST,
    HTTP_DEFAULT_TIMEOUT_SECS,
};
use capacity_domain::error::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client configuration
///
/// Controls connection pooling, timeouts, and other HTTP client behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// TCP keep-alive duration
    pub keepalive: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: HTTP_DEFAULT_MAX_IDLE_PER_HOST,
            idle_timeout: Duration::from_secs(HTTP_DEFAULT_IDLE_TIMEOUT_SECS),
            keepalive: Duration::from_secs(HTTP_DEFAULT_KEEPALIVE_SECS),
            timeout: Duration::from_secs(HTTP_DEFAULT_TIMEOUT_SECS),
            user_agent: format!("capacity/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Build a pooled client from these settings
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .pool_max_idle_per_host(self.max_idle_per_host)
            .pool_idle_timeout(self.idle_timeout)
            .tcp_keepalive(self.keepalive)
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to build HTTP client", e))
    }
}
