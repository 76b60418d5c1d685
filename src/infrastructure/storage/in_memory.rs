use crate::core::errors::SplitbaseError;
use crate::core::models::{Expense, Group, GroupAudit, Settlement, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<String, User>>>,
    groups: Arc<RwLock<HashMap<String, Group>>>,
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
    settlements: Arc<RwLock<HashMap<String, Settlement>>>,
    group_audits: Arc<RwLock<HashMap<String, Vec<GroupAudit>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: User) -> Result<(), SplitbaseError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(SplitbaseError::UserAlreadyRegistered(user.id));
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SplitbaseError> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn save_group(&self, group: Group) -> Result<(), SplitbaseError> {
        let mut groups = self.groups.write().await;
        groups.insert(group.id.clone(), group);
        Ok(())
    }

    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, SplitbaseError> {
        let groups = self.groups.read().await;
        Ok(groups.get(group_id).cloned())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, SplitbaseError> {
        let groups = self.groups.read().await;
        let mut all: Vec<Group> = groups.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>, SplitbaseError> {
        let groups = self.groups.read().await;
        let mut mine: Vec<Group> = groups
            .values()
            .filter(|g| g.is_member(user_id))
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }

    async fn is_group_member(&self, group_id: &str, user_id: &str) -> Result<bool, SplitbaseError> {
        let groups = self.groups.read().await;
        Ok(groups
            .get(group_id)
            .map(|g| g.is_member(user_id))
            .unwrap_or(false))
    }

    async fn apply_expense(&self, expense: Expense) -> Result<Expense, SplitbaseError> {
        // Both locks held across the update so the expense log and the
        // group's denormalized total move together.
        let mut groups = self.groups.write().await;
        let mut expenses = self.expenses.write().await;
        let group = groups
            .get_mut(&expense.group_id)
            .ok_or_else(|| SplitbaseError::GroupNotFound(expense.group_id.clone()))?;
        group.total_expenses += expense.amount;
        expenses.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

    async fn get_group_expenses(&self, group_id: &str) -> Result<Vec<Expense>, SplitbaseError> {
        let expenses = self.expenses.read().await;
        let mut group_expenses: Vec<Expense> = expenses
            .values()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect();
        group_expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(group_expenses)
    }

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), SplitbaseError> {
        let mut settlements = self.settlements.write().await;
        settlements.insert(settlement.id.clone(), settlement);
        Ok(())
    }

    async fn get_settlement(
        &self,
        settlement_id: &str,
    ) -> Result<Option<Settlement>, SplitbaseError> {
        let settlements = self.settlements.read().await;
        Ok(settlements.get(settlement_id).cloned())
    }

    async fn get_group_settlements(
        &self,
        group_id: &str,
    ) -> Result<Vec<Settlement>, SplitbaseError> {
        let settlements = self.settlements.read().await;
        let mut group_settlements: Vec<Settlement> = settlements
            .values()
            .filter(|s| s.group_id == group_id)
            .cloned()
            .collect();
        group_settlements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(group_settlements)
    }

    async fn get_pending_settlements(
        &self,
        group_id: &str,
    ) -> Result<Vec<Settlement>, SplitbaseError> {
        let settlements = self.settlements.read().await;
        let mut pending: Vec<Settlement> = settlements
            .values()
            .filter(|s| s.group_id == group_id && s.is_pending())
            .cloned()
            .collect();
        pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pending)
    }

    async fn save_group_audit(&self, audit: GroupAudit) -> Result<(), SplitbaseError> {
        let mut group_audits = self.group_audits.write().await;
        group_audits
            .entry(audit.group_id.clone())
            .or_insert_with(Vec::new)
            .push(audit);
        Ok(())
    }

    async fn get_group_audits(&self, group_id: &str) -> Result<Vec<GroupAudit>, SplitbaseError> {
        let group_audits = self.group_audits.read().await;
        Ok(group_audits.get(group_id).cloned().unwrap_or_default())
    }
}
