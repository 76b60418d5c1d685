use crate::core::models::Settlement;
use crate::infrastructure::executor::{ExecutionFailure, SettlementExecutor};
use async_trait::async_trait;
use log::info;
use uuid::Uuid;

/// Stand-in for a real chain submitter: always confirms and fabricates a
/// 64-hex-digit transaction hash.
#[derive(Clone, Default)]
pub struct MockSettlementExecutor;

impl MockSettlementExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettlementExecutor for MockSettlementExecutor {
    async fn execute(&self, settlement: &Settlement) -> Result<String, ExecutionFailure> {
        info!(
            "Simulating transfer of {} {} from {} to {}",
            settlement.amount, settlement.currency, settlement.from.id, settlement.to.id
        );
        Ok(format!(
            "0x{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        ))
    }
}

/// Executor that rejects everything. Lets tests and demos exercise the
/// `pending -> failed` transition.
#[derive(Clone, Default)]
pub struct FailingSettlementExecutor;

#[async_trait]
impl SettlementExecutor for FailingSettlementExecutor {
    async fn execute(&self, _settlement: &Settlement) -> Result<String, ExecutionFailure> {
        Err(ExecutionFailure {
            reason: "transfer rejected".to_string(),
        })
    }
}
