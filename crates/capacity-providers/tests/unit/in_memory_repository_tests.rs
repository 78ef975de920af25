//! In-memory capacity repository tests

use capacity_domain::entities::Capacity;
use capacity_domain::repositories::CapacityRepository;
use capacity_domain::value_objects::{PaginationRequest, SortDirection, SortField};
use capacity_providers::repository::InMemoryCapacityRepository;

async fn seeded() -> InMemoryCapacityRepository {
    let repo = InMemoryCapacityRepository::new();
    // name, technology count
    for (name, count) in [("Data", 5_i64), ("Backend", 3), ("Cloud", 5), ("Frontend", 4)] {
        let ids = (1..=count).collect();
        repo.save(&Capacity::new(name, format!("{name} capacity"), ids))
            .await
            .expect("Should save");
    }
    repo
}

fn names(page: &[Capacity]) -> Vec<&str> {
    page.iter().map(|c| c.name.as_str()).collect()
}

#[tokio::test]
async fn test_save_assigns_sequential_ids() {
    let repo = InMemoryCapacityRepository::new();
    let first = repo
        .save(&Capacity::new("A", "first", vec![1, 2, 3]))
        .await
        .expect("Should save");
    let second = repo
        .save(&Capacity::new("B", "second", vec![4, 5, 6]))
        .await
        .expect("Should save");

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(second.technology_ids, vec![4, 5, 6]);
    assert_eq!(repo.count().await.expect("Should count"), 2);
}

#[tokio::test]
async fn test_save_rejects_duplicate_name() {
    let repo = InMemoryCapacityRepository::new();
    repo.save(&Capacity::new("A", "first", vec![1, 2, 3]))
        .await
        .expect("Should save");

    let err = repo
        .save(&Capacity::new("A", "again", vec![4, 5, 6]))
        .await
        .expect_err("Duplicate name should fail");
    assert_eq!(err.kind(), capacity_domain::error::ErrorKind::Unexpected);
    assert_eq!(repo.count().await.expect("Should count"), 1);
}

#[tokio::test]
async fn test_exists_by_name_is_exact() {
    let repo = seeded().await;
    assert!(repo.exists_by_name("Backend").await.expect("Should query"));
    assert!(!repo.exists_by_name("backend").await.expect("Should query"));
    assert!(!repo.exists_by_name("Mobile").await.expect("Should query"));
}

#[tokio::test]
async fn test_find_existing_ids_returns_subset() {
    let repo = seeded().await;
    let found = repo
        .find_existing_ids(&[1, 99, 3, 3])
        .await
        .expect("Should query");
    assert_eq!(found, vec![1, 3]);
}

#[tokio::test]
async fn test_find_page_by_name() {
    let repo = seeded().await;

    let asc = repo
        .find_page(&PaginationRequest::default())
        .await
        .expect("Should list");
    assert_eq!(names(&asc), vec!["Backend", "Cloud", "Data", "Frontend"]);
    assert!(asc.iter().all(|c| c.id.is_some() && c.technology_ids.is_empty()));

    let desc = repo
        .find_page(&PaginationRequest::new(0, 10, None, Some(SortDirection::Desc)))
        .await
        .expect("Should list");
    assert_eq!(names(&desc), vec!["Frontend", "Data", "Cloud", "Backend"]);
}

#[tokio::test]
async fn test_find_page_by_technology_count_breaks_ties_by_name() {
    let repo = seeded().await;

    let asc = repo
        .find_page(&PaginationRequest::new(0, 10, Some(SortField::TechnologyCount), None))
        .await
        .expect("Should list");
    assert_eq!(names(&asc), vec!["Backend", "Frontend", "Cloud", "Data"]);

    let desc = repo
        .find_page(&PaginationRequest::new(
            0,
            10,
            Some(SortField::TechnologyCount),
            Some(SortDirection::Desc),
        ))
        .await
        .expect("Should list");
    assert_eq!(names(&desc), vec!["Cloud", "Data", "Frontend", "Backend"]);
}

#[tokio::test]
async fn test_find_page_applies_offset_and_limit() {
    let repo = seeded().await;

    let second = repo
        .find_page(&PaginationRequest::new(1, 3, None, None))
        .await
        .expect("Should list");
    assert_eq!(names(&second), vec!["Frontend"]);

    let beyond = repo
        .find_page(&PaginationRequest::new(5, 3, None, None))
        .await
        .expect("Should list");
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn test_find_technology_ids() {
    let repo = InMemoryCapacityRepository::new();
    let saved = repo
        .save(&Capacity::new("A", "first", vec![9, 4, 7]))
        .await
        .expect("Should save");

    let ids = repo
        .find_technology_ids(saved.id.expect("Should have id"))
        .await
        .expect("Should query");
    assert_eq!(ids, vec![9, 4, 7]);
    assert!(repo.find_technology_ids(404).await.expect("Should query").is_empty());
}

#[test]
fn test_provider_name() {
    assert_eq!(InMemoryCapacityRepository::new().provider_name(), "memory");
}
