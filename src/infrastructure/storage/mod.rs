use crate::core::errors::SplitbaseError;
use crate::core::models::{Expense, Group, GroupAudit, Settlement, User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_user(&self, user: User) -> Result<(), SplitbaseError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SplitbaseError>;

    async fn save_group(&self, group: Group) -> Result<(), SplitbaseError>;
    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, SplitbaseError>;
    async fn list_groups(&self) -> Result<Vec<Group>, SplitbaseError>;
    async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>, SplitbaseError>;
    async fn is_group_member(&self, group_id: &str, user_id: &str) -> Result<bool, SplitbaseError>;

    /// Persist an expense and bump the owning group's `total_expenses` in one
    /// transition. The two are never updated separately.
    async fn apply_expense(&self, expense: Expense) -> Result<Expense, SplitbaseError>;
    /// A group's expenses, newest first by `date`.
    async fn get_group_expenses(&self, group_id: &str) -> Result<Vec<Expense>, SplitbaseError>;

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), SplitbaseError>;
    async fn get_settlement(&self, settlement_id: &str)
    -> Result<Option<Settlement>, SplitbaseError>;
    async fn get_group_settlements(&self, group_id: &str)
    -> Result<Vec<Settlement>, SplitbaseError>;
    async fn get_pending_settlements(
        &self,
        group_id: &str,
    ) -> Result<Vec<Settlement>, SplitbaseError>;

    async fn save_group_audit(&self, audit: GroupAudit) -> Result<(), SplitbaseError>;
    async fn get_group_audits(&self, group_id: &str) -> Result<Vec<GroupAudit>, SplitbaseError>;
}

pub mod in_memory;
