use crate::constants::{
    BALANCES_QUERIED, EXPENSE_ADDED, EXPENSES_QUERIED, GROUP_CREATED, MAX_AMOUNT, MAX_NAME_LENGTH,
    MAX_TITLE_LENGTH, PENDING_SETTLEMENTS_QUERIED, SETTLEMENT_COMPLETED, SETTLEMENT_FAILED,
    SETTLEMENT_REQUESTED, SUMMARY_QUERIED, USER_ADDED,
};
use crate::core::engine::{self, BalancePolicy};
use crate::core::errors::{FieldError, SplitbaseError};
use crate::core::models::{
    AppLog, Balance, Expense, ExpenseCategory, Group, GroupAudit, GroupSummary, Settlement,
    SettlementStatus, User,
};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::executor::SettlementExecutor;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use log::{debug, info, warn};
use serde_json::json;
use uuid::Uuid;

const SUMMARY_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(3600);

pub struct SplitbaseService<L: LoggingService, S: Storage, C: Cache, E: SettlementExecutor> {
    storage: S,
    logging: L,
    cache: C,
    executor: E,
}

impl<L: LoggingService, S: Storage, C: Cache, E: SettlementExecutor>
    SplitbaseService<L, S, C, E>
{
    pub fn new(storage: S, logging: L, cache: C, executor: E) -> Self {
        info!("Initializing SplitbaseService");
        SplitbaseService {
            storage,
            logging,
            cache,
            executor,
        }
    }

    async fn validate_users(&self, user_ids: &[&str]) -> Result<(), SplitbaseError> {
        for &user_id in user_ids {
            if self.storage.get_user(user_id).await?.is_none() {
                return Err(SplitbaseError::UserNotFound(user_id.to_string()));
            }
        }
        Ok(())
    }

    async fn validate_group_membership(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<Group, SplitbaseError> {
        let group = self
            .storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| SplitbaseError::GroupNotFound(group_id.to_string()))?;
        if !group.is_member(user_id) {
            warn!("User {} is not a member of group {}", user_id, group_id);
            return Err(SplitbaseError::NotGroupMember(user_id.to_string()));
        }
        Ok(group)
    }

    async fn log_and_audit(
        &self,
        group_id: Option<&str>,
        action: &str,
        log_details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), SplitbaseError> {
        self.logging
            .log_action(action, log_details.clone(), user_id)
            .await?;
        if let Some(gid) = group_id {
            self.storage
                .save_group_audit(GroupAudit {
                    id: Uuid::new_v4().to_string(),
                    group_id: gid.to_string(),
                    action: action.to_string(),
                    user_id: user_id.map(String::from),
                    details: serde_json::from_value(log_details).unwrap_or_default(),
                    timestamp: Utc::now(),
                })
                .await?;
        }
        Ok(())
    }

    fn validate_string_input(
        &self,
        field: &str,
        value: &str,
        max_length: usize,
    ) -> Result<(), SplitbaseError> {
        if value.trim().is_empty() {
            return Err(SplitbaseError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.len() > max_length {
            return Err(SplitbaseError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(SplitbaseError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} contains invalid characters", field),
                },
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), SplitbaseError> {
        if !amount.is_finite() {
            return Err(SplitbaseError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Amount".to_string(),
                    description: "Amount must be a finite number".to_string(),
                },
            ));
        }
        if amount <= 0.0 {
            return Err(SplitbaseError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Amount".to_string(),
                    description: "Amount must be greater than 0".to_string(),
                },
            ));
        }
        if amount > MAX_AMOUNT {
            return Err(SplitbaseError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Amount Too Large".to_string(),
                    description: format!("Amount cannot exceed {}", MAX_AMOUNT),
                },
            ));
        }
        Ok(())
    }

    // USERS

    pub async fn add_user(
        &self,
        user: User,
        created_by: Option<&User>,
    ) -> Result<User, SplitbaseError> {
        info!("Registering user {} ({})", user.name, user.id);
        self.validate_string_input("name", &user.name, MAX_NAME_LENGTH)?;
        self.validate_string_input("address", &user.address, MAX_NAME_LENGTH)?;

        self.storage.save_user(user.clone()).await?;
        self.log_and_audit(
            None,
            USER_ADDED,
            json!({ "user_id": user.id, "name": user.name, "address": user.address }),
            created_by.map(|u| u.id.as_str()),
        )
        .await?;
        Ok(user)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, SplitbaseError> {
        self.storage.get_user(user_id).await
    }

    // GROUPS

    pub async fn create_group(
        &self,
        name: String,
        description: Option<String>,
        members: Vec<User>,
        currency: Option<String>,
        created_by: &User,
    ) -> Result<Group, SplitbaseError> {
        info!("Creating group '{}' for user {}", name, created_by.id);
        self.validate_users(&[&created_by.id]).await?;
        self.validate_string_input("name", &name, MAX_NAME_LENGTH)?;
        if let Some(ref desc) = description {
            self.validate_string_input("description", desc, MAX_TITLE_LENGTH)?;
        }

        // Members are snapshotted by value: the group keeps the users as they
        // are right now, not live references.
        let mut all_members = members;
        if !all_members.iter().any(|m| m.id == created_by.id) {
            all_members.push(created_by.clone());
        }
        self.validate_users(
            &all_members.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
        )
        .await?;

        let group = Group {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            members: all_members,
            created_at: Utc::now(),
            total_expenses: 0.0,
            currency: currency.unwrap_or_else(|| "ETH".to_string()),
        };

        self.storage.save_group(group.clone()).await?;
        debug!("Group created with ID: {}", group.id);

        self.log_and_audit(
            Some(&group.id),
            GROUP_CREATED,
            json!({
                "group_id": group.id,
                "name": group.name,
                "currency": group.currency,
                "member_ids": group.members.iter().map(|m| m.id.clone()).collect::<Vec<_>>()
            }),
            Some(created_by.id.as_str()),
        )
        .await?;

        Ok(group)
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Option<Group>, SplitbaseError> {
        self.storage.get_group(group_id).await
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>, SplitbaseError> {
        self.storage.list_groups().await
    }

    pub async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>, SplitbaseError> {
        self.validate_users(&[user_id]).await?;
        self.storage.get_user_groups(user_id).await
    }

    // EXPENSES

    #[allow(clippy::too_many_arguments)]
    pub async fn add_expense(
        &self,
        group_id: &str,
        title: String,
        description: Option<String>,
        amount: f64,
        category: ExpenseCategory,
        paid_by_id: &str,
        split_between_ids: &[String],
        created_by: &User,
    ) -> Result<Expense, SplitbaseError> {
        info!(
            "Adding expense '{}' of {} to group {} by user {}",
            title, amount, group_id, created_by.id
        );
        let group = self
            .validate_group_membership(group_id, &created_by.id)
            .await?;

        self.validate_string_input("title", &title, MAX_TITLE_LENGTH)?;
        if let Some(ref desc) = description {
            self.validate_string_input("description", desc, MAX_TITLE_LENGTH)?;
        }
        self.validate_amount_input("amount", amount)?;

        // Payer and split participants are taken from the group's member
        // snapshot, never looked up globally.
        let paid_by = group
            .members
            .iter()
            .find(|m| m.id == paid_by_id)
            .cloned()
            .ok_or_else(|| SplitbaseError::NotGroupMember(paid_by_id.to_string()))?;

        if split_between_ids.is_empty() {
            warn!("Empty split for expense in group {}", group_id);
            return Err(SplitbaseError::InvalidSplit);
        }
        let split_between = split_between_ids
            .iter()
            .map(|user_id| {
                group
                    .members
                    .iter()
                    .find(|m| m.id == *user_id)
                    .cloned()
                    .ok_or_else(|| SplitbaseError::InvalidSplitUser(user_id.clone()))
            })
            .collect::<Result<Vec<User>, SplitbaseError>>()?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            title,
            description,
            amount,
            currency: group.currency.clone(),
            paid_by,
            split_between,
            category,
            date: Utc::now(),
            settled: false,
        };

        // One storage transition persists the expense and bumps the group's
        // running total, keeping the denormalized cache exact.
        let applied = self.storage.apply_expense(expense).await?;
        self.cache.invalidate_group(group_id).await?;
        debug!("Expense applied with ID: {}", applied.id);

        self.log_and_audit(
            Some(group_id),
            EXPENSE_ADDED,
            json!({
                "expense_id": applied.id,
                "group_id": group_id,
                "title": applied.title,
                "amount": applied.amount,
                "category": applied.category,
                "paid_by_id": applied.paid_by.id
            }),
            Some(created_by.id.as_str()),
        )
        .await?;

        Ok(applied)
    }

    pub async fn group_expenses(
        &self,
        group_id: &str,
        queried_by: &User,
    ) -> Result<Vec<Expense>, SplitbaseError> {
        let _group = self
            .validate_group_membership(group_id, &queried_by.id)
            .await?;
        let expenses = self.storage.get_group_expenses(group_id).await?;
        self.log_and_audit(
            Some(group_id),
            EXPENSES_QUERIED,
            json!({ "group_id": group_id, "user_id": queried_by.id }),
            Some(queried_by.id.as_str()),
        )
        .await?;
        Ok(expenses)
    }

    // BALANCES & SUMMARIES

    /// One user's view of one group. An unknown group id surfaces as
    /// `GroupNotFound` here; the pure engine underneath treats it as a plain
    /// lookup miss.
    pub async fn group_summary(
        &self,
        group_id: &str,
        user_id: &str,
        include_settled: Option<bool>,
    ) -> Result<GroupSummary, SplitbaseError> {
        self.validate_users(&[user_id]).await?;

        let policy = BalancePolicy {
            include_settled: include_settled.unwrap_or(true),
        };
        // Only default-policy summaries are cached; a policy-filtered view
        // would poison the cache for everyone else.
        let cacheable = policy.include_settled;

        if cacheable {
            if let Some(summary) = self.cache.get_group_summary(group_id, user_id).await? {
                debug!("Summary cache hit for group {} user {}", group_id, user_id);
                return Ok(summary);
            }
        }

        let group = self
            .storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| SplitbaseError::GroupNotFound(group_id.to_string()))?;
        let expenses = self.storage.get_group_expenses(group_id).await?;
        let settlements = self.storage.get_group_settlements(group_id).await?;

        let groups = [group];
        let summary = engine::group_summary(
            &groups,
            group_id,
            user_id,
            &expenses,
            &settlements,
            policy,
        )
        .ok_or_else(|| SplitbaseError::GroupNotFound(group_id.to_string()))?;

        if cacheable {
            self.cache
                .save_group_summary(group_id, user_id, &summary, SUMMARY_CACHE_TTL)
                .await?;
        }

        self.log_and_audit(
            Some(group_id),
            SUMMARY_QUERIED,
            json!({ "group_id": group_id, "user_id": user_id }),
            Some(user_id),
        )
        .await?;

        Ok(summary)
    }

    /// Net standing of every member of a group, in roster order.
    pub async fn member_balances(&self, group_id: &str) -> Result<Vec<Balance>, SplitbaseError> {
        let group = self
            .storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| SplitbaseError::GroupNotFound(group_id.to_string()))?;
        let expenses = self.storage.get_group_expenses(group_id).await?;
        let balances = engine::member_balances(&group, &expenses, BalancePolicy::default());

        self.log_and_audit(
            Some(group_id),
            BALANCES_QUERIED,
            json!({ "group_id": group_id }),
            None,
        )
        .await?;
        Ok(balances)
    }

    // SETTLEMENTS

    pub async fn create_settlement(
        &self,
        group_id: &str,
        from_id: &str,
        to_id: &str,
        amount: f64,
        created_by: &User,
    ) -> Result<Settlement, SplitbaseError> {
        info!(
            "Requesting settlement of {} from {} to {} in group {}",
            amount, from_id, to_id, group_id
        );
        let group = self
            .validate_group_membership(group_id, &created_by.id)
            .await?;

        if from_id == to_id {
            return Err(SplitbaseError::SelfSettlement);
        }
        let from = group
            .members
            .iter()
            .find(|m| m.id == from_id)
            .cloned()
            .ok_or_else(|| SplitbaseError::NotGroupMember(from_id.to_string()))?;
        let to = group
            .members
            .iter()
            .find(|m| m.id == to_id)
            .cloned()
            .ok_or_else(|| SplitbaseError::NotGroupMember(to_id.to_string()))?;
        self.validate_amount_input("amount", amount)?;

        let settlement = Settlement {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            from,
            to,
            amount,
            currency: group.currency.clone(),
            status: SettlementStatus::Pending,
            transaction_hash: None,
            created_at: Utc::now(),
            settled_at: None,
        };

        self.storage.save_settlement(settlement.clone()).await?;
        self.cache.invalidate_group(group_id).await?;

        self.log_and_audit(
            Some(group_id),
            SETTLEMENT_REQUESTED,
            json!({
                "settlement_id": settlement.id,
                "group_id": group_id,
                "from_id": settlement.from.id,
                "to_id": settlement.to.id,
                "amount": amount
            }),
            Some(created_by.id.as_str()),
        )
        .await?;

        Ok(settlement)
    }

    /// Hand a pending settlement to the executor and record the outcome.
    ///
    /// The executor owns the transfer; this method only validates the
    /// `pending -> completed/failed` transition and persists the resolved
    /// record. `from`, `to` and `amount` come through unchanged either way.
    pub async fn execute_settlement(
        &self,
        settlement_id: &str,
        requested_by: &User,
    ) -> Result<Settlement, SplitbaseError> {
        let settlement = self
            .storage
            .get_settlement(settlement_id)
            .await?
            .ok_or_else(|| SplitbaseError::SettlementNotFound(settlement_id.to_string()))?;
        let _group = self
            .validate_group_membership(&settlement.group_id, &requested_by.id)
            .await?;

        if !settlement.is_pending() {
            warn!("Settlement {} already resolved", settlement_id);
            return Err(SplitbaseError::SettlementAlreadyResolved(
                settlement_id.to_string(),
            ));
        }

        let group_id = settlement.group_id.clone();
        let resolved = match self.executor.execute(&settlement).await {
            Ok(transaction_hash) => {
                let completed = settlement.complete(transaction_hash, Utc::now())?;
                self.log_and_audit(
                    Some(&group_id),
                    SETTLEMENT_COMPLETED,
                    json!({
                        "settlement_id": completed.id,
                        "group_id": group_id,
                        "transaction_hash": completed.transaction_hash
                    }),
                    Some(requested_by.id.as_str()),
                )
                .await?;
                completed
            }
            Err(failure) => {
                warn!("Settlement {} failed: {}", settlement_id, failure);
                let failed = settlement.fail(Utc::now())?;
                self.log_and_audit(
                    Some(&group_id),
                    SETTLEMENT_FAILED,
                    json!({
                        "settlement_id": failed.id,
                        "group_id": group_id,
                        "reason": failure.reason
                    }),
                    Some(requested_by.id.as_str()),
                )
                .await?;
                failed
            }
        };

        self.storage.save_settlement(resolved.clone()).await?;
        self.cache.invalidate_group(&group_id).await?;
        Ok(resolved)
    }

    pub async fn pending_settlements(
        &self,
        group_id: &str,
        user: &User,
    ) -> Result<Vec<Settlement>, SplitbaseError> {
        let _group = self.validate_group_membership(group_id, &user.id).await?;
        let settlements = self.storage.get_pending_settlements(group_id).await?;
        self.log_and_audit(
            Some(group_id),
            PENDING_SETTLEMENTS_QUERIED,
            json!({ "group_id": group_id, "user_id": user.id }),
            Some(user.id.as_str()),
        )
        .await?;
        Ok(settlements)
    }

    // AUDIT

    pub async fn get_group_audits(
        &self,
        group_id: &str,
    ) -> Result<Vec<GroupAudit>, SplitbaseError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| SplitbaseError::GroupNotFound(group_id.to_string()))?;
        self.storage.get_group_audits(group_id).await
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SplitbaseError> {
        self.logging.get_logs().await
    }
}
