//! Capacity entity validation tests

use capacity_domain::entities::Capacity;
use capacity_domain::error::ValidationError;

fn valid_capacity() -> Capacity {
    Capacity::new("Backend", "Server-side development stack", vec![1, 2, 3])
}

#[test]
fn test_valid_capacity_passes() {
    assert_eq!(valid_capacity().validate(), Ok(()));
}

#[test]
fn test_blank_name_is_required() {
    let mut capacity = valid_capacity();
    capacity.name = "   ".to_string();
    assert_eq!(capacity.validate(), Err(ValidationError::NameRequired));
}

#[test]
fn test_blank_description_is_required() {
    let mut capacity = valid_capacity();
    capacity.description = "\t".to_string();
    assert_eq!(capacity.validate(), Err(ValidationError::DescriptionRequired));
}

#[test]
fn test_name_checked_before_description() {
    let capacity = Capacity::new("", "", vec![]);
    assert_eq!(capacity.validate(), Err(ValidationError::NameRequired));
}

#[test]
fn test_name_length_limit() {
    let mut capacity = valid_capacity();
    capacity.name = "n".repeat(50);
    assert!(capacity.validate().is_ok());

    capacity.name = "n".repeat(51);
    assert_eq!(capacity.validate(), Err(ValidationError::NameTooLong));
}

#[test]
fn test_name_length_counts_characters_not_bytes() {
    let mut capacity = valid_capacity();
    capacity.name = "é".repeat(50);
    assert!(capacity.validate().is_ok());
}

#[test]
fn test_description_length_limit() {
    let mut capacity = valid_capacity();
    capacity.description = "d".repeat(90);
    assert!(capacity.validate().is_ok());

    capacity.description = "d".repeat(91);
    assert_eq!(capacity.validate(), Err(ValidationError::DescriptionTooLong));
}

#[test]
fn test_field_lengths_checked_before_technologies() {
    let capacity = Capacity::new("n".repeat(51), "ok", vec![]);
    assert_eq!(capacity.validate(), Err(ValidationError::NameTooLong));
}

#[test]
fn test_technologies_required() {
    let capacity = Capacity::new("Backend", "Server side", vec![]);
    assert_eq!(capacity.validate(), Err(ValidationError::TechnologiesRequired));
}

#[test]
fn test_technologies_minimum() {
    let capacity = Capacity::new("Backend", "Server side", vec![1, 2]);
    assert_eq!(capacity.validate(), Err(ValidationError::TechnologiesMin));
}

#[test]
fn test_technologies_maximum() {
    let capacity = Capacity::new("Backend", "Server side", (1..=20).collect());
    assert!(capacity.validate().is_ok());

    let capacity = Capacity::new("Backend", "Server side", (1..=21).collect());
    assert_eq!(capacity.validate(), Err(ValidationError::TechnologiesMax));
}

#[test]
fn test_duplicated_technologies() {
    let capacity = Capacity::new("Backend", "Server side", vec![1, 2, 2]);
    assert_eq!(
        capacity.validate(),
        Err(ValidationError::TechnologiesDuplicated)
    );
}

#[test]
fn test_count_checked_before_duplicates() {
    let capacity = Capacity::new("Backend", "Server side", vec![7, 7]);
    assert_eq!(capacity.validate(), Err(ValidationError::TechnologiesMin));
}

#[test]
fn test_with_id_keeps_fields() {
    let capacity = valid_capacity().with_id(42);
    assert_eq!(capacity.id, Some(42));
    assert_eq!(capacity.name, "Backend");
    assert_eq!(capacity.technology_ids, vec![1, 2, 3]);
}

#[test]
fn test_capacity_json_uses_camel_case() {
    let json = serde_json::json!({
        "name": "Frontend",
        "description": "Browser side",
        "technologyIds": [4, 5, 6]
    });
    let capacity: Capacity = serde_json::from_value(json).expect("Should deserialize");
    assert_eq!(capacity.id, None);
    assert_eq!(capacity.technology_ids, vec![4, 5, 6]);
}
