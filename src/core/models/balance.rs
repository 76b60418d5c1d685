use super::expense::Expense;
use super::group::Group;
use super::settlement::Settlement;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Net standing of one user in one group. Positive means the group owes the
/// user, negative means the user owes the group.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Balance {
    pub user_id: String,
    pub group_id: String,
    pub amount: f64,
    pub currency: String,
}

/// Everything the group screen renders in one shot.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct GroupSummary {
    pub group: Group,
    pub user_balance: f64,
    /// max(user_balance, 0). Zero whenever `total_owing` is non-zero.
    pub total_owed: f64,
    /// max(-user_balance, 0). Zero whenever `total_owed` is non-zero.
    pub total_owing: f64,
    pub recent_expenses: Vec<Expense>,
    pub pending_settlements: Vec<Settlement>,
}
