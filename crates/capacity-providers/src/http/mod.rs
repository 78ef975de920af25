//! HTTP Client Configuration
//!
//! Settings and construction of the shared reqwest client used by
//! HTTP-based providers. The client is built once and injected.
//!
//! ## Contents
//!
//! - `HttpClientConfig` - Configuration for HTTP client settings
//! - `HttpResponseUtils` - Utilities for handling HTTP responses (re-exported from utils)

pub mod provider;

pub use provider::HttpClientConfig;
pub use crate::utils::HttpResponseUtils;
