use super::user::User;
use crate::core::errors::SplitbaseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SettlementStatus::Pending => "pending",
            SettlementStatus::Completed => "completed",
            SettlementStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// A transfer intended to zero out (part of) a balance between two members.
///
/// Status only moves forward: `pending -> completed` or `pending -> failed`,
/// both terminal. `from`, `to` and `amount` are fixed once the settlement is
/// created; resolution only fills in the audit fields.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Settlement {
    pub id: String,
    pub group_id: String,
    pub from: User,
    pub to: User,
    pub amount: f64,
    pub currency: String,
    pub status: SettlementStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<DateTime<Utc>>,
}

impl Settlement {
    pub fn is_pending(&self) -> bool {
        self.status == SettlementStatus::Pending
    }

    /// Resolve a pending settlement as completed, recording the hash of the
    /// externally-executed transfer and the completion time.
    pub fn complete(
        self,
        transaction_hash: String,
        at: DateTime<Utc>,
    ) -> Result<Settlement, SplitbaseError> {
        if !self.is_pending() {
            return Err(SplitbaseError::SettlementAlreadyResolved(self.id));
        }
        Ok(Settlement {
            status: SettlementStatus::Completed,
            transaction_hash: Some(transaction_hash),
            settled_at: Some(at),
            ..self
        })
    }

    /// Resolve a pending settlement as failed. No hash is recorded; the
    /// settlement stays in the ledger as a terminal failure.
    pub fn fail(self, at: DateTime<Utc>) -> Result<Settlement, SplitbaseError> {
        if !self.is_pending() {
            return Err(SplitbaseError::SettlementAlreadyResolved(self.id));
        }
        Ok(Settlement {
            status: SettlementStatus::Failed,
            settled_at: Some(at),
            ..self
        })
    }
}
