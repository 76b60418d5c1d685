//! Balance computation over expense and settlement snapshots.
//!
//! Everything in this module is pure and synchronous: inputs are immutable
//! slices, outputs are freshly built values, and nothing is retained between
//! calls. Callers are responsible for supplying a consistent snapshot; the
//! service layer does this by reading from storage before calling in.

use crate::constants::RECENT_EXPENSE_COUNT;
use crate::core::models::{Balance, Expense, Group, GroupSummary, Settlement, User};

/// Controls which expenses enter the balance math.
///
/// Every expense counts regardless of its `settled` flag by default.
/// Excluding settled expenses is an explicit caller choice, not something
/// the engine decides.
#[derive(Clone, Copy, Debug)]
pub struct BalancePolicy {
    pub include_settled: bool,
}

impl Default for BalancePolicy {
    fn default() -> Self {
        BalancePolicy {
            include_settled: true,
        }
    }
}

impl BalancePolicy {
    fn counts(&self, expense: &Expense) -> bool {
        self.include_settled || !expense.settled
    }
}

/// Net balance of `user_id` across `expenses`, under the default policy.
///
/// Per expense: the payer is credited the full amount they fronted, and every
/// split participant is debited an equal share (`amount / split size`). A
/// payer who is also in the split nets the difference. An empty expense slice
/// yields 0.
///
/// Shares use plain f64 division with no remainder redistribution; across a
/// split of n the shares may not sum exactly to the amount. The drift stays
/// below `BALANCE_EPSILON`.
pub fn user_balance(expenses: &[Expense], user_id: &str) -> f64 {
    user_balance_with(expenses, user_id, BalancePolicy::default())
}

pub fn user_balance_with(expenses: &[Expense], user_id: &str, policy: BalancePolicy) -> f64 {
    let mut balance = 0.0;
    for expense in expenses.iter().filter(|e| policy.counts(e)) {
        if expense.paid_by.id == user_id {
            balance += expense.amount;
        }
        if expense.splits_to(user_id) {
            balance -= expense.share();
        }
    }
    balance
}

/// Standing of every group member over the group's expenses, one `Balance`
/// per member in roster order.
pub fn member_balances(group: &Group, expenses: &[Expense], policy: BalancePolicy) -> Vec<Balance> {
    let group_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|e| e.group_id == group.id)
        .collect();
    group
        .members
        .iter()
        .map(|member| Balance {
            user_id: member.id.clone(),
            group_id: group.id.clone(),
            amount: member_balance(&group_expenses, member, policy),
            currency: group.currency.clone(),
        })
        .collect()
}

fn member_balance(expenses: &[&Expense], member: &User, policy: BalancePolicy) -> f64 {
    let mut balance = 0.0;
    for expense in expenses.iter().filter(|e| policy.counts(e)) {
        if expense.paid_by.id == member.id {
            balance += expense.amount;
        }
        if expense.splits_to(&member.id) {
            balance -= expense.share();
        }
    }
    balance
}

/// One user's view of one group: net balance, owed/owing split, the most
/// recent expenses and the settlements still waiting to execute.
///
/// Returns `None` when `group_id` is not in `groups`: a lookup miss the
/// caller branches on, not an error.
pub fn group_summary(
    groups: &[Group],
    group_id: &str,
    user_id: &str,
    expenses: &[Expense],
    settlements: &[Settlement],
    policy: BalancePolicy,
) -> Option<GroupSummary> {
    let group = groups.iter().find(|g| g.id == group_id)?;

    let group_expenses: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.group_id == group_id)
        .cloned()
        .collect();

    let user_balance = user_balance_with(&group_expenses, user_id, policy);

    let mut recent_expenses = group_expenses;
    recent_expenses.sort_by(|a, b| b.date.cmp(&a.date));
    recent_expenses.truncate(RECENT_EXPENSE_COUNT);

    let pending_settlements = settlements
        .iter()
        .filter(|s| s.group_id == group_id && s.is_pending())
        .cloned()
        .collect();

    Some(GroupSummary {
        group: group.clone(),
        user_balance,
        total_owed: user_balance.max(0.0),
        total_owing: (-user_balance).max(0.0),
        recent_expenses,
        pending_settlements,
    })
}
