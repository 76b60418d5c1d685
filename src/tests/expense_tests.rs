use crate::constants::BALANCE_EPSILON;
use crate::core::errors::SplitbaseError;
use crate::core::models::{ExpenseCategory, User};
use crate::core::services::SplitbaseService;
use crate::infrastructure::cache::Cache;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::executor::mock::MockSettlementExecutor;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::seed;
use crate::tests::{create_test_service, test_user};

async fn setup_group(
    service: &SplitbaseService<
        InMemoryLogging,
        InMemoryStorage,
        InMemoryCache,
        MockSettlementExecutor,
    >,
) -> (User, User, User, String) {
    let alice = service
        .add_user(test_user("u1", "Alice"), None)
        .await
        .unwrap();
    let bob = service.add_user(test_user("u2", "Bob"), None).await.unwrap();
    let charlie = service
        .add_user(test_user("u3", "Charlie"), None)
        .await
        .unwrap();
    let group = service
        .create_group(
            "Weekend Trip".to_string(),
            None,
            vec![bob.clone(), charlie.clone()],
            None,
            &alice,
        )
        .await
        .unwrap();
    (alice, bob, charlie, group.id)
}

#[tokio::test]
async fn test_add_expense_keeps_group_total_exact() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, _, _, group_id) = setup_group(&service).await;

    let split: Vec<String> = vec!["u1".into(), "u2".into(), "u3".into()];
    service
        .add_expense(
            &group_id,
            "Hotel Booking".to_string(),
            None,
            0.3,
            ExpenseCategory::Accommodation,
            "u1",
            &split,
            &alice,
        )
        .await
        .unwrap();
    service
        .add_expense(
            &group_id,
            "Gas Money".to_string(),
            None,
            0.08,
            ExpenseCategory::Transport,
            "u2",
            &split,
            &alice,
        )
        .await
        .unwrap();

    let group = service.get_group(&group_id).await.unwrap().unwrap();
    let expenses = service.group_expenses(&group_id, &alice).await.unwrap();
    let sum: f64 = expenses.iter().map(|e| e.amount).sum();
    assert!((group.total_expenses - sum).abs() < BALANCE_EPSILON);
    assert!((group.total_expenses - 0.38).abs() < BALANCE_EPSILON);
}

#[tokio::test]
async fn test_expense_inherits_group_currency_and_member_snapshot() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, bob, _, group_id) = setup_group(&service).await;

    let expense = service
        .add_expense(
            &group_id,
            "Dinner".to_string(),
            Some("Italian place downtown".to_string()),
            0.07,
            ExpenseCategory::Food,
            &bob.id,
            &["u1".to_string(), "u2".to_string()],
            &alice,
        )
        .await
        .unwrap();

    assert_eq!(expense.currency, "ETH");
    assert_eq!(expense.paid_by.id, bob.id);
    assert_eq!(expense.split_between.len(), 2);
    assert!(!expense.settled);
}

#[tokio::test]
async fn test_add_expense_rejects_empty_split() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, _, _, group_id) = setup_group(&service).await;

    let result = service
        .add_expense(
            &group_id,
            "Nothing".to_string(),
            None,
            0.1,
            ExpenseCategory::Other,
            "u1",
            &[],
            &alice,
        )
        .await;
    assert!(matches!(result, Err(SplitbaseError::InvalidSplit)));
}

#[tokio::test]
async fn test_add_expense_rejects_outsider_in_split() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, _, _, group_id) = setup_group(&service).await;
    service
        .add_user(test_user("u4", "Diana"), None)
        .await
        .unwrap();

    let result = service
        .add_expense(
            &group_id,
            "Dinner".to_string(),
            None,
            0.1,
            ExpenseCategory::Food,
            "u1",
            &["u1".to_string(), "u4".to_string()],
            &alice,
        )
        .await;
    assert!(matches!(result, Err(SplitbaseError::InvalidSplitUser(id)) if id == "u4"));
}

#[tokio::test]
async fn test_add_expense_rejects_non_positive_amount() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, _, _, group_id) = setup_group(&service).await;

    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = service
            .add_expense(
                &group_id,
                "Bad".to_string(),
                None,
                bad,
                ExpenseCategory::Other,
                "u1",
                &["u1".to_string()],
                &alice,
            )
            .await;
        assert!(matches!(result, Err(SplitbaseError::InvalidInput(_, _))));
    }
}

#[tokio::test]
async fn test_expenses_listed_newest_first() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, _, _, group_id) = setup_group(&service).await;

    for title in ["First", "Second", "Third"] {
        service
            .add_expense(
                &group_id,
                title.to_string(),
                None,
                0.01,
                ExpenseCategory::Other,
                "u1",
                &["u1".to_string(), "u2".to_string()],
                &alice,
            )
            .await
            .unwrap();
    }

    let expenses = service.group_expenses(&group_id, &alice).await.unwrap();
    assert_eq!(expenses.len(), 3);
    for pair in expenses.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
}

#[tokio::test]
async fn test_summary_reflects_new_expense_after_cache_invalidation() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, _, _, group_id) = setup_group(&service).await;

    let before = service
        .group_summary(&group_id, &alice.id, None)
        .await
        .unwrap();
    assert_eq!(before.user_balance, 0.0);

    service
        .add_expense(
            &group_id,
            "Hotel Booking".to_string(),
            None,
            0.3,
            ExpenseCategory::Accommodation,
            "u1",
            &["u1".to_string(), "u2".to_string(), "u3".to_string()],
            &alice,
        )
        .await
        .unwrap();

    // The cached zero-balance summary must not survive the write.
    let after = service
        .group_summary(&group_id, &alice.id, None)
        .await
        .unwrap();
    assert!((after.user_balance - 0.2).abs() < BALANCE_EPSILON);
    assert!((after.total_owed - 0.2).abs() < BALANCE_EPSILON);
    assert_eq!(after.total_owing, 0.0);
}

#[tokio::test]
async fn test_demo_seed_totals_match_expense_sums() {
    let _ = env_logger::try_init();
    let storage = InMemoryStorage::new();
    seed::load(&storage).await.unwrap();

    for group_id in ["1", "2", "3"] {
        let group = storage.get_group(group_id).await.unwrap().unwrap();
        let expenses = storage.get_group_expenses(group_id).await.unwrap();
        let sum: f64 = expenses.iter().map(|e| e.amount).sum();
        assert!(
            (group.total_expenses - sum).abs() < BALANCE_EPSILON,
            "group {} total diverged from its expense log",
            group_id
        );
    }
}

#[tokio::test]
async fn test_summary_cache_serves_repeat_reads() {
    let _ = env_logger::try_init();
    let storage = InMemoryStorage::new();
    let cache = InMemoryCache::new();
    let service = SplitbaseService::new(
        storage,
        InMemoryLogging::new(),
        cache.clone(),
        MockSettlementExecutor::new(),
    );
    let (alice, _, _, group_id) = setup_group(&service).await;

    service
        .group_summary(&group_id, &alice.id, None)
        .await
        .unwrap();
    let cached = cache.get_group_summary(&group_id, &alice.id).await.unwrap();
    assert!(cached.is_some());
}
