use chrono::Utc;

use crate::core::errors::SplitbaseError;
use crate::core::models::{SettlementStatus, User};
use crate::seed;
use crate::tests::{create_failing_service, create_test_service, test_user};

async fn two_member_group<L, S, C, E>(
    service: &crate::core::services::SplitbaseService<L, S, C, E>,
) -> (User, User, String)
where
    L: crate::infrastructure::logging::LoggingService,
    S: crate::infrastructure::storage::Storage,
    C: crate::infrastructure::cache::Cache,
    E: crate::infrastructure::executor::SettlementExecutor,
{
    let alice = service
        .add_user(test_user("u1", "Alice"), None)
        .await
        .unwrap();
    let bob = service.add_user(test_user("u2", "Bob"), None).await.unwrap();
    let group = service
        .create_group(
            "Dinner Squad".to_string(),
            None,
            vec![bob.clone()],
            None,
            &alice,
        )
        .await
        .unwrap();
    (alice, bob, group.id)
}

#[tokio::test]
async fn test_settlement_starts_pending() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, bob, group_id) = two_member_group(&service).await;

    let settlement = service
        .create_settlement(&group_id, &bob.id, &alice.id, 0.08, &bob)
        .await
        .unwrap();

    assert_eq!(settlement.status, SettlementStatus::Pending);
    assert!(settlement.transaction_hash.is_none());
    assert!(settlement.settled_at.is_none());
    assert_eq!(settlement.currency, "ETH");

    let pending = service.pending_settlements(&group_id, &alice).await.unwrap();
    assert_eq!(pending.len(), 1);
}

#[tokio::test]
async fn test_execute_settlement_completes_and_preserves_parties() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, bob, group_id) = two_member_group(&service).await;

    let settlement = service
        .create_settlement(&group_id, &bob.id, &alice.id, 0.08, &bob)
        .await
        .unwrap();
    let resolved = service
        .execute_settlement(&settlement.id, &bob)
        .await
        .unwrap();

    assert_eq!(resolved.status, SettlementStatus::Completed);
    assert!(resolved.transaction_hash.is_some());
    assert!(resolved.settled_at.is_some());
    // Resolution never touches the parties or the amount.
    assert_eq!(resolved.from.id, settlement.from.id);
    assert_eq!(resolved.to.id, settlement.to.id);
    assert_eq!(resolved.amount, settlement.amount);

    let pending = service.pending_settlements(&group_id, &alice).await.unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_execute_settlement_is_terminal() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (_alice, bob, group_id) = two_member_group(&service).await;

    let settlement = service
        .create_settlement(&group_id, &bob.id, "u1", 0.08, &bob)
        .await
        .unwrap();
    service
        .execute_settlement(&settlement.id, &bob)
        .await
        .unwrap();

    let again = service.execute_settlement(&settlement.id, &bob).await;
    assert!(matches!(
        again,
        Err(SplitbaseError::SettlementAlreadyResolved(id)) if id == settlement.id
    ));
}

#[tokio::test]
async fn test_executor_failure_resolves_settlement_as_failed() {
    let _ = env_logger::try_init();
    let service = create_failing_service();
    let (alice, bob, group_id) = two_member_group(&service).await;

    let settlement = service
        .create_settlement(&group_id, &bob.id, &alice.id, 0.08, &bob)
        .await
        .unwrap();
    let resolved = service
        .execute_settlement(&settlement.id, &bob)
        .await
        .unwrap();

    assert_eq!(resolved.status, SettlementStatus::Failed);
    assert!(resolved.transaction_hash.is_none());
    assert_eq!(resolved.amount, settlement.amount);

    // Failed is terminal too.
    let again = service.execute_settlement(&settlement.id, &bob).await;
    assert!(matches!(
        again,
        Err(SplitbaseError::SettlementAlreadyResolved(_))
    ));
}

#[tokio::test]
async fn test_self_settlement_rejected() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, _bob, group_id) = two_member_group(&service).await;

    let result = service
        .create_settlement(&group_id, &alice.id, &alice.id, 0.05, &alice)
        .await;
    assert!(matches!(result, Err(SplitbaseError::SelfSettlement)));
}

#[tokio::test]
async fn test_settlement_requires_group_membership() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (alice, _bob, group_id) = two_member_group(&service).await;
    let outsider = service
        .add_user(test_user("u9", "Mallory"), None)
        .await
        .unwrap();

    let result = service
        .create_settlement(&group_id, &outsider.id, &alice.id, 0.05, &alice)
        .await;
    assert!(matches!(result, Err(SplitbaseError::NotGroupMember(id)) if id == "u9"));
}

#[test]
fn test_transition_guards_on_the_value_itself() {
    let data = seed::demo_data();
    let completed = data
        .settlements
        .into_iter()
        .find(|s| s.status == SettlementStatus::Completed)
        .unwrap();

    // A resolved settlement can move neither forward nor back.
    let now = Utc::now();
    assert!(matches!(
        completed.clone().complete("0xdeadbeef".to_string(), now),
        Err(SplitbaseError::SettlementAlreadyResolved(_))
    ));
    assert!(matches!(
        completed.fail(now),
        Err(SplitbaseError::SettlementAlreadyResolved(_))
    ));
}
