//! Technology Lookup Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`HttpTechnologyProvider`] | Calls the technology microservice over HTTP |
//! | [`InMemoryTechnologyProvider`] | Fixed catalog for development and tests |

pub mod http;
pub mod in_memory;

pub use http::HttpTechnologyProvider;
pub use in_memory::InMemoryTechnologyProvider;
