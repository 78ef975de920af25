//! Capacity registration tests

use crate::support::{Calls, Harness, correlation};
use capacity_application::ports::CapacityServiceInterface;
use capacity_domain::entities::Capacity;
use capacity_domain::error::{ErrorKind, ValidationError};

fn backend(ids: Vec<i64>) -> Capacity {
    Capacity::new("Backend", "Server-side development", ids)
}

async fn violation(harness: &Harness, capacity: Capacity) -> ValidationError {
    harness
        .service
        .register_capacity(capacity, &correlation())
        .await
        .expect_err("Registration should fail")
        .validation()
        .expect("Should be a validation error")
}

#[tokio::test]
async fn test_register_persists_and_assigns_id() {
    let harness = Harness::new();

    let saved = harness
        .service
        .register_capacity(backend(vec![3, 1, 2]), &correlation())
        .await
        .expect("Should register");

    assert!(saved.id.is_some());
    assert_eq!(saved.name, "Backend");
    assert_eq!(saved.technology_ids, vec![3, 1, 2]);
    assert_eq!(Calls::get(&harness.calls.check_exist), 1);
    assert_eq!(Calls::get(&harness.calls.exists_by_name), 1);
    assert_eq!(Calls::get(&harness.calls.save), 1);
}

#[tokio::test]
async fn test_correlation_id_reaches_technology_service() {
    let harness = Harness::new();
    harness
        .service
        .register_capacity(backend(vec![1, 2, 3]), &correlation())
        .await
        .expect("Should register");

    assert_eq!(harness.correlation_ids(), vec!["test-correlation".to_string()]);
}

#[tokio::test]
async fn test_too_few_technologies_makes_no_port_calls() {
    let harness = Harness::new();
    assert_eq!(
        violation(&harness, backend(vec![1, 2])).await,
        ValidationError::TechnologiesMin
    );
    assert_eq!(harness.calls.total(), 0);
}

#[tokio::test]
async fn test_too_many_technologies_makes_no_port_calls() {
    let harness = Harness::new();
    assert_eq!(
        violation(&harness, backend((1..=21).collect())).await,
        ValidationError::TechnologiesMax
    );
    assert_eq!(harness.calls.total(), 0);
}

#[tokio::test]
async fn test_duplicates_fail_before_existence_check() {
    let harness = Harness::new();
    assert_eq!(
        violation(&harness, backend(vec![4, 5, 4])).await,
        ValidationError::TechnologiesDuplicated
    );
    assert_eq!(Calls::get(&harness.calls.check_exist), 0);
}

#[tokio::test]
async fn test_first_violation_wins() {
    let harness = Harness::new();
    let capacity = Capacity::new("  ", "d".repeat(200), vec![1]);
    assert_eq!(
        violation(&harness, capacity).await,
        ValidationError::NameRequired
    );

    let capacity = Capacity::new("n".repeat(60), "d".repeat(200), vec![1]);
    assert_eq!(
        violation(&harness, capacity).await,
        ValidationError::NameTooLong
    );
    assert_eq!(harness.calls.total(), 0);
}

#[tokio::test]
async fn test_unknown_technology_stops_before_uniqueness() {
    let harness = Harness::new();
    assert_eq!(
        violation(&harness, backend(vec![1, 2, 99])).await,
        ValidationError::TechnologiesNotFound
    );
    assert_eq!(Calls::get(&harness.calls.check_exist), 1);
    assert_eq!(Calls::get(&harness.calls.exists_by_name), 0);
    assert_eq!(Calls::get(&harness.calls.save), 0);
}

#[tokio::test]
async fn test_id_missing_from_existence_answer_is_not_found() {
    let harness = Harness::builder().omit_from_existence(2).build();
    assert_eq!(
        violation(&harness, backend(vec![1, 2, 3])).await,
        ValidationError::TechnologiesNotFound
    );
    assert_eq!(Calls::get(&harness.calls.save), 0);
}

#[tokio::test]
async fn test_existing_name_is_rejected_without_save() {
    let harness = Harness::new();
    harness
        .service
        .register_capacity(backend(vec![1, 2, 3]), &correlation())
        .await
        .expect("Should register");

    let error = harness
        .service
        .register_capacity(backend(vec![4, 5, 6]), &correlation())
        .await
        .expect_err("Second registration should fail");

    assert_eq!(error.validation(), Some(ValidationError::NameAlreadyExists));
    assert_eq!(error.field(), Some("name"));
    assert_eq!(error.code(), "400");
    assert_eq!(Calls::get(&harness.calls.save), 1);
}

#[tokio::test]
async fn test_technology_service_failure_is_upstream() {
    let harness = Harness::builder().failing_technology_service().build();

    let error = harness
        .service
        .register_capacity(backend(vec![1, 2, 3]), &correlation())
        .await
        .expect_err("Should fail");

    assert_eq!(error.kind(), ErrorKind::Upstream);
    assert_eq!(error.code(), "500");
    assert_eq!(Calls::get(&harness.calls.exists_by_name), 0);
    assert_eq!(Calls::get(&harness.calls.save), 0);
}
