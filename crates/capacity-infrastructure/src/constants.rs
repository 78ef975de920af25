//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Business limits are defined in `capacity_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "capacity.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "capacity";

/// Environment variable prefix for configuration (`CAPACITY__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "CAPACITY";

/// Separator between prefix, sections and keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV_VAR: &str = "CAPACITY_LOG";

/// Fallback log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "capacity";

// ============================================================================
// TECHNOLOGY SERVICE CONSTANTS
// ============================================================================

/// Default technology service URL
pub const DEFAULT_TECHNOLOGY_SERVICE_URL: &str = "http://localhost:8081";

/// Default technology service request timeout in seconds
pub const DEFAULT_TECHNOLOGY_TIMEOUT_SECS: u64 = 10;

/// Default idle connections kept per technology service host
pub const DEFAULT_TECHNOLOGY_MAX_IDLE_PER_HOST: usize = 10;

// ============================================================================
// DATABASE CONSTANTS
// ============================================================================

/// Default maximum pool size
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Default minimum idle connections
pub const DB_MIN_IDLE: u32 = 1;

/// Default connection checkout timeout in seconds
pub const DB_CONNECTION_TIMEOUT_SECS: u64 = 30;
