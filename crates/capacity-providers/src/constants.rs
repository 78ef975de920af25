//! Provider Constants
//!
//! Constants specific to provider implementations. Domain limits live in
//! `capacity-domain`, deployment defaults in `capacity-infrastructure`.

// ============================================================================
// TECHNOLOGY SERVICE CONSTANTS
// ============================================================================

/// Header carrying the correlation id to the technology service
pub const X_MESSAGE_ID_HEADER: &str = "x-message-id";

/// Batch existence check endpoint
pub const TECHNOLOGY_CHECK_EXISTS_PATH: &str = "/technology/check-exists";

/// Batch fetch endpoint
pub const TECHNOLOGY_BY_IDS_PATH: &str = "/technology/by-ids";

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// HTTP CLIENT CONSTANTS
// ============================================================================

/// Default maximum idle connections per host
pub const HTTP_DEFAULT_MAX_IDLE_PER_HOST: usize = 10;

/// Default idle connection timeout in seconds
pub const HTTP_DEFAULT_IDLE_TIMEOUT_SECS: u64 = 90;

/// Default TCP keep-alive in seconds
pub const HTTP_DEFAULT_KEEPALIVE_SECS: u64 = 60;

/// Default total request timeout in seconds
pub const HTTP_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out";

// ============================================================================
// REPOSITORY CONSTANTS
// ============================================================================

/// Provider name of the in-memory repository
pub const REPOSITORY_PROVIDER_MEMORY: &str = "memory";

/// Provider name of the PostgreSQL repository
pub const REPOSITORY_PROVIDER_POSTGRES: &str = "postgres";
