//! Demo dataset: four users, three groups and a handful of expenses and
//! settlements, loadable at startup so the API has something to show without
//! any prior writes.

use crate::core::errors::SplitbaseError;
use crate::core::models::{
    Expense, ExpenseCategory, Group, Settlement, SettlementStatus, User,
};
use crate::infrastructure::storage::Storage;
use chrono::{TimeZone, Utc};
use log::info;

pub struct DemoData {
    pub users: Vec<User>,
    pub groups: Vec<Group>,
    pub expenses: Vec<Expense>,
    pub settlements: Vec<Settlement>,
}

pub fn demo_data() -> DemoData {
    let alice = User {
        id: "1".to_string(),
        name: "Alice".to_string(),
        address: "0x1234567890123456789012345678901234567890".to_string(),
        avatar: Some("👩‍💼".to_string()),
    };
    let bob = User {
        id: "2".to_string(),
        name: "Bob".to_string(),
        address: "0x2345678901234567890123456789012345678901".to_string(),
        avatar: Some("👨‍💻".to_string()),
    };
    let charlie = User {
        id: "3".to_string(),
        name: "Charlie".to_string(),
        address: "0x3456789012345678901234567890123456789012".to_string(),
        avatar: Some("👨‍🎨".to_string()),
    };
    let diana = User {
        id: "4".to_string(),
        name: "Diana".to_string(),
        address: "0x4567890123456789012345678901234567890123".to_string(),
        avatar: Some("👩‍🔬".to_string()),
    };

    // Running totals start at zero; loading applies each expense through
    // storage so the totals stay exact.
    let groups = vec![
        Group {
            id: "1".to_string(),
            name: "Weekend Trip".to_string(),
            description: Some("Our amazing weekend getaway".to_string()),
            members: vec![alice.clone(), bob.clone(), charlie.clone()],
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            total_expenses: 0.0,
            currency: "ETH".to_string(),
        },
        Group {
            id: "2".to_string(),
            name: "Dinner Squad".to_string(),
            description: Some("Regular dinner meetups".to_string()),
            members: vec![alice.clone(), bob.clone(), diana.clone()],
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
            total_expenses: 0.0,
            currency: "ETH".to_string(),
        },
        Group {
            id: "3".to_string(),
            name: "House Expenses".to_string(),
            description: Some("Shared apartment costs".to_string()),
            members: vec![alice.clone(), bob.clone(), charlie.clone(), diana.clone()],
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            total_expenses: 0.0,
            currency: "ETH".to_string(),
        },
    ];

    let expenses = vec![
        Expense {
            id: "1".to_string(),
            group_id: "1".to_string(),
            title: "Hotel Booking".to_string(),
            description: Some("Two nights at Mountain Resort".to_string()),
            amount: 0.3,
            currency: "ETH".to_string(),
            paid_by: alice.clone(),
            split_between: vec![alice.clone(), bob.clone(), charlie.clone()],
            category: ExpenseCategory::Accommodation,
            date: Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap(),
            settled: false,
        },
        Expense {
            id: "2".to_string(),
            group_id: "1".to_string(),
            title: "Gas Money".to_string(),
            description: Some("Road trip fuel costs".to_string()),
            amount: 0.08,
            currency: "ETH".to_string(),
            paid_by: bob.clone(),
            split_between: vec![alice.clone(), bob.clone(), charlie.clone()],
            category: ExpenseCategory::Transport,
            date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            settled: false,
        },
        Expense {
            id: "3".to_string(),
            group_id: "1".to_string(),
            title: "Dinner at Restaurant".to_string(),
            description: Some("Italian place downtown".to_string()),
            amount: 0.07,
            currency: "ETH".to_string(),
            paid_by: charlie.clone(),
            split_between: vec![alice.clone(), bob.clone(), charlie.clone()],
            category: ExpenseCategory::Food,
            date: Utc.with_ymd_and_hms(2024, 1, 16, 20, 0, 0).unwrap(),
            settled: false,
        },
        Expense {
            id: "4".to_string(),
            group_id: "2".to_string(),
            title: "Pizza Night".to_string(),
            description: Some("Large pizzas for everyone".to_string()),
            amount: 0.05,
            currency: "ETH".to_string(),
            paid_by: alice.clone(),
            split_between: vec![alice.clone(), bob.clone(), diana.clone()],
            category: ExpenseCategory::Food,
            date: Utc.with_ymd_and_hms(2024, 1, 18, 19, 0, 0).unwrap(),
            settled: true,
        },
        Expense {
            id: "5".to_string(),
            group_id: "2".to_string(),
            title: "Movie Tickets".to_string(),
            description: Some("Latest blockbuster".to_string()),
            amount: 0.04,
            currency: "ETH".to_string(),
            paid_by: bob.clone(),
            split_between: vec![alice.clone(), bob.clone(), diana.clone()],
            category: ExpenseCategory::Entertainment,
            date: Utc.with_ymd_and_hms(2024, 1, 17, 18, 0, 0).unwrap(),
            settled: false,
        },
    ];

    let settlements = vec![
        Settlement {
            id: "1".to_string(),
            group_id: "1".to_string(),
            from: bob.clone(),
            to: alice.clone(),
            amount: 0.08,
            currency: "ETH".to_string(),
            status: SettlementStatus::Pending,
            transaction_hash: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 18, 10, 0, 0).unwrap(),
            settled_at: None,
        },
        Settlement {
            id: "2".to_string(),
            group_id: "2".to_string(),
            from: diana.clone(),
            to: alice.clone(),
            amount: 0.03,
            currency: "ETH".to_string(),
            status: SettlementStatus::Completed,
            transaction_hash: Some("0xabcdef1234567890".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 17, 11, 0, 0).unwrap(),
            settled_at: Some(Utc.with_ymd_and_hms(2024, 1, 17, 11, 5, 0).unwrap()),
        },
    ];

    DemoData {
        users: vec![alice, bob, charlie, diana],
        groups,
        expenses,
        settlements,
    }
}

/// Load the demo dataset into storage. Expenses go through `apply_expense`
/// so the group totals end up equal to the sum of their expenses.
pub async fn load<S: Storage>(storage: &S) -> Result<(), SplitbaseError> {
    let data = demo_data();
    for user in data.users {
        storage.save_user(user).await?;
    }
    for group in data.groups {
        storage.save_group(group).await?;
    }
    for expense in data.expenses {
        storage.apply_expense(expense).await?;
    }
    for settlement in data.settlements {
        storage.save_settlement(settlement).await?;
    }
    info!("Demo dataset loaded");
    Ok(())
}
