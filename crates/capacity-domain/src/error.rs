//! Error handling types
//!
//! Every operation of the service returns [`Result`]. Errors fall into three
//! kinds (see [`ErrorKind`]) that callers map to a transport response:
//!
//! - **Validation**: the request broke a business rule. Carries a
//!   [`ValidationError`] with a stable code and the offending field.
//! - **Upstream**: the technology service was unreachable or answered with a
//!   non-success status. 4xx and 5xx are not distinguished.
//! - **Unexpected**: anything else (database faults, internal bugs). The public
//!   message never exposes the underlying detail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Code returned to callers for client-caused failures
pub const CLIENT_ERROR_CODE: &str = "400";

/// Code returned to callers for server-side failures
pub const SERVER_ERROR_CODE: &str = "500";

/// Public message for failures that must not leak detail
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong, please try again";

/// Public message for technology service failures
pub const TECHNOLOGY_SERVICE_ERROR_MESSAGE: &str = "Error communicating with technology service";

/// Business rule violated by a capacity request
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    /// Name is missing or blank
    #[error("Capacity name is required")]
    NameRequired,
    /// Description is missing or blank
    #[error("Capacity description is required")]
    DescriptionRequired,
    /// Name exceeds the maximum length
    #[error("Capacity name cannot exceed 50 characters")]
    NameTooLong,
    /// Description exceeds the maximum length
    #[error("Capacity description cannot exceed 90 characters")]
    DescriptionTooLong,
    /// No technology ids were supplied
    #[error("Capacity must have at least 3 technologies")]
    TechnologiesRequired,
    /// Fewer technology ids than the minimum
    #[error("Capacity must have at least 3 technologies")]
    TechnologiesMin,
    /// More technology ids than the maximum
    #[error("Capacity cannot have more than 20 technologies")]
    TechnologiesMax,
    /// The same technology id appears more than once
    #[error("Capacity cannot have duplicate technologies")]
    TechnologiesDuplicated,
    /// The technology service does not know some of the ids
    #[error("Some technologies do not exist")]
    TechnologiesNotFound,
    /// Another capacity already uses the name
    #[error("Capacity with this name already exists")]
    NameAlreadyExists,
}

impl ValidationError {
    /// Stable machine-readable code (e.g. `TECHNOLOGIES_MIN`)
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "NAME_REQUIRED",
            Self::DescriptionRequired => "DESCRIPTION_REQUIRED",
            Self::NameTooLong => "NAME_TOO_LONG",
            Self::DescriptionTooLong => "DESCRIPTION_TOO_LONG",
            Self::TechnologiesRequired => "TECHNOLOGIES_REQUIRED",
            Self::TechnologiesMin => "TECHNOLOGIES_MIN",
            Self::TechnologiesMax => "TECHNOLOGIES_MAX",
            Self::TechnologiesDuplicated => "TECHNOLOGIES_DUPLICATED",
            Self::TechnologiesNotFound => "TECHNOLOGIES_NOT_FOUND",
            Self::NameAlreadyExists => "NAME_ALREADY_EXISTS",
        }
    }

    /// Request field the violation refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired | Self::NameTooLong | Self::NameAlreadyExists => "name",
            Self::DescriptionRequired | Self::DescriptionTooLong => "description",
            Self::TechnologiesRequired
            | Self::TechnologiesMin
            | Self::TechnologiesMax
            | Self::TechnologiesDuplicated
            | Self::TechnologiesNotFound => "technologyIds",
        }
    }
}

/// Coarse classification used by outer layers to pick a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Client-caused, never retried
    Validation,
    /// Technology service failure
    Upstream,
    /// Any other failure
    Unexpected,
}

/// Main error type for the Capacity service
#[derive(Error, Debug)]
pub enum Error {
    /// A business rule was violated
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid argument provided by the caller (e.g. unknown sort field)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Technology service unreachable or answered with a non-success status
    #[error("Technology service error: {message}")]
    TechnologyService {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Database-related error
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Classification used when mapping to a transport response
impl Error {
    /// Which of the three failure kinds this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::InvalidArgument { .. } => ErrorKind::Validation,
            Self::TechnologyService { .. } => ErrorKind::Upstream,
            _ => ErrorKind::Unexpected,
        }
    }

    /// Status-like code: `"400"` for validation, `"500"` otherwise
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => CLIENT_ERROR_CODE,
            ErrorKind::Upstream | ErrorKind::Unexpected => SERVER_ERROR_CODE,
        }
    }

    /// Message safe to hand to a caller
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(violation) => violation.to_string(),
            Self::InvalidArgument { message } => message.clone(),
            Self::TechnologyService { .. } => TECHNOLOGY_SERVICE_ERROR_MESSAGE.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Offending request field, only for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(violation) => Some(violation.field()),
            _ => None,
        }
    }

    /// The violated rule, if this is a validation error
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(violation) => Some(*violation),
            _ => None,
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Technology service error creation methods
impl Error {
    /// Create a technology service error
    pub fn technology_service<S: Into<String>>(message: S) -> Self {
        Self::TechnologyService {
            message: message.into(),
            source: None,
        }
    }

    /// Create a technology service error with source
    pub fn technology_service_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::TechnologyService {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Database error creation methods
impl Error {
    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a database error with source
    pub fn database_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal and infrastructure error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}
