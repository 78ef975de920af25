//! Technology service configuration types

use crate::constants::{
    DEFAULT_TECHNOLOGY_MAX_IDLE_PER_HOST, DEFAULT_TECHNOLOGY_SERVICE_URL,
    DEFAULT_TECHNOLOGY_TIMEOUT_SECS,
};
use capacity_domain::value_objects::TechnologySummary;
use serde::{Deserialize, Serialize};

/// Technology lookup provider selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyProvider {
    /// Remote technology microservice
    #[default]
    Http,
    /// Fixed catalog from `catalog`
    Memory,
}

/// Technology service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnologyServiceConfig {
    /// Which lookup provider to use
    pub provider: TechnologyProvider,

    /// Base URL of the technology service
    pub base_url: String,

    /// Total request timeout in seconds
    pub timeout_secs: u64,

    /// Idle connections kept per host
    pub max_idle_per_host: usize,

    /// Technologies known to the `memory` provider
    pub catalog: Vec<TechnologySummary>,
}

impl Default for TechnologyServiceConfig {
    fn default() -> Self {
        Self {
            provider: TechnologyProvider::default(),
            base_url: DEFAULT_TECHNOLOGY_SERVICE_URL.to_string(),
            timeout_secs: DEFAULT_TECHNOLOGY_TIMEOUT_SECS,
            max_idle_per_host: DEFAULT_TECHNOLOGY_MAX_IDLE_PER_HOST,
            catalog: Vec::new(),
        }
    }
}
