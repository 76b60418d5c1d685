pub mod mock;

use crate::core::models::Settlement;
use async_trait::async_trait;

/// Outcome reported by an executor that could not confirm the transfer.
#[derive(Debug, Clone)]
pub struct ExecutionFailure {
    pub reason: String,
}

impl std::fmt::Display for ExecutionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Collaborator that performs the actual transfer behind a settlement.
///
/// The service only hands over a pending settlement and records the outcome;
/// submitting and confirming the transaction is entirely the executor's
/// concern. On success the executor returns the transaction hash.
#[async_trait]
pub trait SettlementExecutor: Send + Sync {
    async fn execute(&self, settlement: &Settlement) -> Result<String, ExecutionFailure>;
}
