//! Technology projections

use crate::entities::{CapacityId, TechnologyId};
use serde::{Deserialize, Serialize};

/// Value Object: technology as reported by the technology service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechnologySummary {
    /// Technology id
    pub id: TechnologyId,
    /// Technology name
    pub name: String,
}

impl TechnologySummary {
    /// Create a summary
    pub fn new<S: Into<String>>(id: TechnologyId, name: S) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Value Object: capacity listing row with its technologies resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityWithTechnologies {
    /// Capacity id
    pub id: CapacityId,
    /// Capacity name
    pub name: String,
    /// Capacity description
    pub description: String,
    /// Technologies the service recognized, possibly fewer than linked
    pub technologies: Vec<TechnologySummary>,
}
