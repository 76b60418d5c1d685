pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;
pub mod seed;
pub mod visualization;

pub use crate::core::engine::{self, BalancePolicy};
pub use crate::core::errors::SplitbaseError;
pub use crate::core::services::SplitbaseService;
pub use crate::infrastructure::cache::in_memory::InMemoryCache;
pub use crate::infrastructure::executor::mock::MockSettlementExecutor;
pub use crate::infrastructure::logging::in_memory::InMemoryLogging;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;
pub use crate::visualization::Visualization;

#[cfg(test)]
mod tests;
