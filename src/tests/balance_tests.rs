use crate::constants::BALANCE_EPSILON;
use crate::core::engine::{self, BalancePolicy};
use crate::core::models::{Expense, SettlementStatus};
use crate::seed;

fn group_expenses(group_id: &str) -> Vec<Expense> {
    seed::demo_data()
        .expenses
        .into_iter()
        .filter(|e| e.group_id == group_id)
        .collect()
}

#[test]
fn test_uninvolved_user_balance_is_zero() {
    let expenses = group_expenses("1");
    // Diana is not in group 1: never paid, never in a split.
    assert_eq!(engine::user_balance(&expenses, "4"), 0.0);
}

#[test]
fn test_empty_expenses_yield_zero_balance() {
    assert_eq!(engine::user_balance(&[], "1"), 0.0);
}

#[test]
fn test_payer_splitting_only_with_self_nets_out() {
    let mut expense = group_expenses("1").remove(0);
    let payer = expense.paid_by.clone();
    expense.split_between = vec![payer.clone()];
    // Fronted the amount and owes the whole share to themselves: both
    // clauses apply to the same expense and cancel.
    let balance = engine::user_balance(&[expense], &payer.id);
    assert!(balance.abs() < BALANCE_EPSILON);
}

#[test]
fn test_hotel_scenario() {
    // Hotel: 0.30 paid by Alice, split Alice/Bob/Charlie.
    let expenses: Vec<Expense> = group_expenses("1")
        .into_iter()
        .filter(|e| e.title == "Hotel Booking")
        .collect();

    assert!((engine::user_balance(&expenses, "1") - 0.20).abs() < BALANCE_EPSILON);
    assert!((engine::user_balance(&expenses, "2") + 0.10).abs() < BALANCE_EPSILON);
    assert!((engine::user_balance(&expenses, "3") + 0.10).abs() < BALANCE_EPSILON);
}

#[test]
fn test_hotel_and_gas_scenario() {
    // Adds Gas: 0.08 paid by Bob, split three ways.
    let expenses: Vec<Expense> = group_expenses("1")
        .into_iter()
        .filter(|e| e.title == "Hotel Booking" || e.title == "Gas Money")
        .collect();

    let expected_alice = 0.20 - 0.08 / 3.0;
    assert!((engine::user_balance(&expenses, "1") - expected_alice).abs() < BALANCE_EPSILON);
}

#[test]
fn test_closed_group_balances_sum_to_zero() {
    // Every payer is in every split, so the group is closed and the net
    // positions cancel out.
    let data = seed::demo_data();
    let group = data.groups.iter().find(|g| g.id == "1").unwrap().clone();
    let expenses = group_expenses("1");

    let total: f64 = group
        .members
        .iter()
        .map(|m| engine::user_balance(&expenses, &m.id))
        .sum();
    assert!(total.abs() < BALANCE_EPSILON);
}

#[test]
fn test_member_balances_preserve_roster_order() {
    let data = seed::demo_data();
    let group = data.groups.into_iter().find(|g| g.id == "1").unwrap();
    let expenses = group_expenses("1");

    let balances = engine::member_balances(&group, &expenses, BalancePolicy::default());
    assert_eq!(balances.len(), group.members.len());
    for (balance, member) in balances.iter().zip(group.members.iter()) {
        assert_eq!(balance.user_id, member.id);
        assert_eq!(balance.group_id, group.id);
        assert_eq!(balance.currency, group.currency);
    }
}

#[test]
fn test_policy_excludes_settled_expenses() {
    // Group 2: Pizza Night (0.05, Alice, settled) and Movie Tickets
    // (0.04, Bob, outstanding).
    let expenses = group_expenses("2");

    let with_settled = engine::user_balance(&expenses, "1");
    assert!((with_settled - (0.05 - 0.05 / 3.0 - 0.04 / 3.0)).abs() < BALANCE_EPSILON);

    let policy = BalancePolicy {
        include_settled: false,
    };
    let outstanding_only = engine::user_balance_with(&expenses, "1", policy);
    assert!((outstanding_only + 0.04 / 3.0).abs() < BALANCE_EPSILON);
}

#[test]
fn test_group_summary_unknown_group_is_none() {
    let data = seed::demo_data();
    let summary = engine::group_summary(
        &data.groups,
        "missing",
        "1",
        &data.expenses,
        &data.settlements,
        BalancePolicy::default(),
    );
    assert!(summary.is_none());
}

#[test]
fn test_group_summary_owed_and_owing_are_exclusive() {
    let data = seed::demo_data();
    for member_id in ["1", "2", "3"] {
        let summary = engine::group_summary(
            &data.groups,
            "1",
            member_id,
            &data.expenses,
            &data.settlements,
            BalancePolicy::default(),
        )
        .unwrap();
        assert!(summary.total_owed >= 0.0);
        assert!(summary.total_owing >= 0.0);
        assert!(
            summary.total_owed < BALANCE_EPSILON || summary.total_owing < BALANCE_EPSILON,
            "owed and owing both non-zero for member {}",
            member_id
        );
        assert!(
            (summary.user_balance - (summary.total_owed - summary.total_owing)).abs()
                < BALANCE_EPSILON
        );
    }
}

#[test]
fn test_group_summary_recent_expenses_newest_first() {
    let data = seed::demo_data();
    let summary = engine::group_summary(
        &data.groups,
        "1",
        "1",
        &data.expenses,
        &data.settlements,
        BalancePolicy::default(),
    )
    .unwrap();

    assert_eq!(summary.recent_expenses.len(), 3);
    assert_eq!(summary.recent_expenses[0].title, "Dinner at Restaurant");
    assert_eq!(summary.recent_expenses[1].title, "Hotel Booking");
    assert_eq!(summary.recent_expenses[2].title, "Gas Money");
    for pair in summary.recent_expenses.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
}

#[test]
fn test_group_summary_pending_settlements_only() {
    let data = seed::demo_data();
    let summary = engine::group_summary(
        &data.groups,
        "1",
        "1",
        &data.expenses,
        &data.settlements,
        BalancePolicy::default(),
    )
    .unwrap();
    assert_eq!(summary.pending_settlements.len(), 1);
    assert_eq!(
        summary.pending_settlements[0].status,
        SettlementStatus::Pending
    );

    // Group 2's only settlement is already completed.
    let summary = engine::group_summary(
        &data.groups,
        "2",
        "1",
        &data.expenses,
        &data.settlements,
        BalancePolicy::default(),
    )
    .unwrap();
    assert!(summary.pending_settlements.is_empty());
}

#[test]
fn test_group_with_no_expenses_is_settled_up() {
    let data = seed::demo_data();
    let group = data.groups.iter().find(|g| g.id == "3").unwrap();

    for member in &group.members {
        let summary = engine::group_summary(
            &data.groups,
            "3",
            &member.id,
            &data.expenses,
            &data.settlements,
            BalancePolicy::default(),
        )
        .unwrap();
        assert_eq!(summary.user_balance, 0.0);
        assert_eq!(summary.total_owed, 0.0);
        assert_eq!(summary.total_owing, 0.0);
        assert!(summary.recent_expenses.is_empty());
    }
}

#[test]
fn test_payer_outside_split_keeps_full_credit() {
    let mut expense = group_expenses("1").remove(0);
    // Alice pays but only Bob and Charlie owe shares.
    expense.split_between.retain(|u| u.id != "1");
    let expenses = vec![expense.clone()];

    assert!((engine::user_balance(&expenses, "1") - expense.amount).abs() < BALANCE_EPSILON);
    assert!(
        (engine::user_balance(&expenses, "2") + expense.amount / 2.0).abs() < BALANCE_EPSILON
    );
}
