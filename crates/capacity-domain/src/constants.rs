//! Domain constants
//!
//! Business limits for capacities and the bounds used to normalize pagination.

// ============================================================================
// CAPACITY LIMITS
// ============================================================================

/// Maximum number of characters in a capacity name
pub const MAX_NAME_LENGTH: usize = 50;

/// Maximum number of characters in a capacity description
pub const MAX_DESCRIPTION_LENGTH: usize = 90;

/// Minimum number of technologies linked to a capacity
pub const MIN_TECHNOLOGIES: usize = 3;

/// Maximum number of technologies linked to a capacity
pub const MAX_TECHNOLOGIES: usize = 20;

// ============================================================================
// PAGINATION
// ============================================================================

/// Page index used when none (or a negative one) is requested
pub const DEFAULT_PAGE: u32 = 0;

/// Page size used when none (or a non-positive one) is requested
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a caller may request
pub const MAX_PAGE_SIZE: u32 = 100;
