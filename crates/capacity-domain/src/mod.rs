//! # Capacity Domain
//!
//! Core business types of the Capacity service. A capacity is a named, described
//! bundle of 3 to 20 distinct technology references; technologies themselves are
//! owned by an external service and only ever seen here as read-only summaries.
//!
//! ## Layout
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | The [`Capacity`](entities::Capacity) aggregate and its validation rules |
//! | [`value_objects`] | Pagination, pages, technology summaries, correlation ids |
//! | [`repositories`] | Persistence port for capacities |
//! | [`ports`] | External service ports (technology lookup) |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Business limits and pagination defaults |
//!
//! This crate has no knowledge of storage engines or transports.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{Capacity, CapacityId, TechnologyId};
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use value_objects::{
    CapacityWithTechnologies, CorrelationId, Page, PaginationRequest, SortDirection, SortField,
    TechnologySummary,
};
