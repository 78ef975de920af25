//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`TechnologyLookupProvider`] | Existence checks and summaries from the technology service |

/// Technology lookup provider port
pub mod technology;

pub use technology::TechnologyLookupProvider;
