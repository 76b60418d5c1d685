mod balance_tests;
mod expense_tests;
mod settlement_tests;

use crate::core::models::User;
use crate::core::services::SplitbaseService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::executor::mock::{FailingSettlementExecutor, MockSettlementExecutor};
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service()
-> SplitbaseService<InMemoryLogging, InMemoryStorage, InMemoryCache, MockSettlementExecutor> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    let executor = MockSettlementExecutor::new();
    SplitbaseService::new(storage, logging, cache, executor)
}

pub fn create_failing_service()
-> SplitbaseService<InMemoryLogging, InMemoryStorage, InMemoryCache, FailingSettlementExecutor> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    SplitbaseService::new(storage, logging, cache, FailingSettlementExecutor::default())
}

pub fn test_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        address: format!("0x{:0>40}", id),
        avatar: None,
    }
}
