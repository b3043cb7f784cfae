mod api_tests;

use crate::core::service::EnlistService;

pub fn create_test_service() -> EnlistService {
    EnlistService::new()
}
