//! Pagination request normalization tests

use capacity_domain::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use capacity_domain::value_objects::{PaginationRequest, SortDirection, SortField};

#[test]
fn test_default_request() {
    let request = PaginationRequest::default();
    assert_eq!(request.page(), 0);
    assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
    assert_eq!(request.sort_by(), SortField::Name);
    assert_eq!(request.sort_direction(), SortDirection::Asc);
    assert_eq!(request.offset(), 0);
}

#[test]
fn test_negative_page_is_reset() {
    let request = PaginationRequest::new(-1, 10, None, None);
    assert_eq!(request.page(), 0);
}

#[test]
fn test_non_positive_size_uses_default() {
    assert_eq!(PaginationRequest::new(0, 0, None, None).size(), DEFAULT_PAGE_SIZE);
    assert_eq!(PaginationRequest::new(0, -5, None, None).size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_size_is_capped() {
    assert_eq!(PaginationRequest::new(0, 101, None, None).size(), MAX_PAGE_SIZE);
    assert_eq!(PaginationRequest::new(0, 100, None, None).size(), 100);
    assert_eq!(PaginationRequest::new(0, 1, None, None).size(), 1);
}

#[test]
fn test_offset_is_page_times_size() {
    let request = PaginationRequest::new(3, 25, None, None);
    assert_eq!(request.offset(), 75);
}

#[test]
fn test_explicit_sort_is_kept() {
    let request = PaginationRequest::new(
        1,
        5,
        Some(SortField::TechnologyCount),
        Some(SortDirection::Desc),
    );
    assert_eq!(request.sort_by(), SortField::TechnologyCount);
    assert_eq!(request.sort_direction(), SortDirection::Desc);
}

#[test]
fn test_sort_field_parsing_is_case_insensitive() {
    assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
    assert_eq!(
        "technology_count".parse::<SortField>().unwrap(),
        SortField::TechnologyCount
    );
    assert_eq!(
        "Technology-Count".parse::<SortField>().unwrap(),
        SortField::TechnologyCount
    );
    assert!("popularity".parse::<SortField>().is_err());
}

#[test]
fn test_sort_direction_parsing() {
    assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
    assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    assert!("sideways".parse::<SortDirection>().is_err());
}
