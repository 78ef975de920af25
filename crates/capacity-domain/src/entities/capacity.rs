//! Capacity entity
//!
//! A capacity groups between [`MIN_TECHNOLOGIES`] and [`MAX_TECHNOLOGIES`]
//! distinct technologies under a unique name. The id is assigned by the
//! persistence layer and stays `None` until the capacity is saved.

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_TECHNOLOGIES, MIN_TECHNOLOGIES};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier assigned to a persisted capacity
pub type CapacityId = i64;

/// Identifier of a technology owned by the technology service
pub type TechnologyId = i64;

/// Entity: Capacity
///
/// # Example
///
/// ```
/// use capacity_domain::entities::Capacity;
///
/// let capacity = Capacity::new("Backend", "Server-side development", vec![1, 2, 3]);
/// assert!(capacity.id.is_none());
/// assert!(capacity.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    /// Assigned on save
    #[serde(default)]
    pub id: Option<CapacityId>,
    /// Unique display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Linked technologies, in the order they were supplied
    #[serde(default)]
    pub technology_ids: Vec<TechnologyId>,
}

impl Capacity {
    /// Create an unsaved capacity
    pub fn new<N: Into<String>, D: Into<String>>(
        name: N,
        description: D,
        technology_ids: Vec<TechnologyId>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            technology_ids,
        }
    }

    /// Return the same capacity carrying a persisted id
    pub fn with_id(mut self, id: CapacityId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check the local business rules, stopping at the first violation.
    ///
    /// Order: name required, description required, name length,
    /// description length, technologies required, minimum, maximum,
    /// duplicates. Remote checks (technology existence, name uniqueness)
    /// are not part of this.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_fields()?;
        self.validate_technologies()
    }

    fn validate_fields(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong);
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::DescriptionTooLong);
        }
        Ok(())
    }

    fn validate_technologies(&self) -> Result<(), ValidationError> {
        let count = self.technology_ids.len();
        if count == 0 {
            return Err(ValidationError::TechnologiesRequired);
        }
        if count < MIN_TECHNOLOGIES {
            return Err(ValidationError::TechnologiesMin);
        }
        if count > MAX_TECHNOLOGIES {
            return Err(ValidationError::TechnologiesMax);
        }
        let distinct: HashSet<&TechnologyId> = self.technology_ids.iter().collect();
        if distinct.len() != count {
            return Err(ValidationError::TechnologiesDuplicated);
        }
        Ok(())
    }
}
