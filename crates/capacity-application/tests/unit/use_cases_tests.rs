//! Basic compilation tests for application use cases

use capacity_application::ports::CapacityServiceInterface;
use capacity_application::use_cases::CapacityServiceImpl;

#[test]
fn test_use_cases_can_be_imported() {
    let service_type = std::any::type_name::<CapacityServiceImpl>();
    assert!(
        service_type.contains("CapacityServiceImpl"),
        "CapacityServiceImpl type should be available"
    );
}

#[test]
fn test_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<CapacityServiceImpl>();
    assert_send_sync::<Box<dyn CapacityServiceInterface>>();
}
