//! Persistence configuration types

use crate::constants::{DB_CONNECTION_TIMEOUT_SECS, DB_MAX_CONNECTIONS, DB_MIN_IDLE};
use serde::{Deserialize, Serialize};

/// Repository provider selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryProvider {
    /// Process-local storage, lost on exit
    #[default]
    Memory,
    /// PostgreSQL
    Postgres,
}

/// Repository configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Which repository to use
    pub provider: RepositoryProvider,

    /// PostgreSQL settings, used by the `postgres` provider
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL (empty when unused)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of idle connections
    pub min_idle: u32,
    /// Connection checkout timeout in seconds
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: DB_MAX_CONNECTIONS,
            min_idle: DB_MIN_IDLE,
            connection_timeout_secs: DB_CONNECTION_TIMEOUT_SECS,
        }
    }
}
