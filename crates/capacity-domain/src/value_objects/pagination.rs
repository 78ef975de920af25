//! Pagination parameters
//!
//! A [`PaginationRequest`] is always within bounds: construction clamps
//! out-of-range values instead of failing.

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column a capacity listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    /// Order by capacity name
    #[default]
    Name,
    /// Order by number of linked technologies, ties broken by name ascending
    TechnologyCount,
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "NAME" => Ok(Self::Name),
            "TECHNOLOGY_COUNT" => Ok(Self::TechnologyCount),
            other => Err(Error::invalid_argument(format!(
                "Invalid sort field: {other}. Use name or technology_count"
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "NAME"),
            Self::TechnologyCount => write!(f, "TECHNOLOGY_COUNT"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(Error::invalid_argument(format!(
                "Invalid sort direction: {other}. Use asc or desc"
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Value Object: normalized listing parameters
///
/// # Example
///
/// ```
/// use capacity_domain::value_objects::{PaginationRequest, SortField};
///
/// let request = PaginationRequest::new(-3, 500, Some(SortField::TechnologyCount), None);
/// assert_eq!(request.page(), 0);
/// assert_eq!(request.size(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    page: u32,
    size: u32,
    sort_by: SortField,
    sort_direction: SortDirection,
}

impl PaginationRequest {
    /// Build a request, clamping values into bounds.
    ///
    /// A negative page becomes [`DEFAULT_PAGE`], a non-positive size becomes
    /// [`DEFAULT_PAGE_SIZE`] and a size above [`MAX_PAGE_SIZE`] is capped.
    pub fn new(
        page: i64,
        size: i64,
        sort_by: Option<SortField>,
        sort_direction: Option<SortDirection>,
    ) -> Self {
        let page = if page < 0 {
            DEFAULT_PAGE
        } else {
            u32::try_from(page).unwrap_or(u32::MAX)
        };
        let size = if size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            u32::try_from(size.min(i64::from(MAX_PAGE_SIZE))).unwrap_or(MAX_PAGE_SIZE)
        };

        Self {
            page,
            size,
            sort_by: sort_by.unwrap_or_default(),
            sort_direction: sort_direction.unwrap_or_default(),
        }
    }

    /// Zero-based page index
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of rows per page, always in `1..=MAX_PAGE_SIZE`
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Ordering column
    pub fn sort_by(&self) -> SortField {
        self.sort_by
    }

    /// Ordering direction
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self::new(
            i64::from(DEFAULT_PAGE),
            i64::from(DEFAULT_PAGE_SIZE),
            None,
            None,
        )
    }
}
