mod common;

use common::names;
use domain_blocklist::domain::entities::{BatchStatus, ItemOutcome};
use domain_blocklist::error::{AppError, ValidationError};
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_append_distinct_names_all_applied(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let result = service
        .append(names(&["a.com", "b.com", "c.com"]))
        .await
        .unwrap();

    assert_eq!(result.status(), BatchStatus::Success);
    assert_eq!(result.applied.len(), 3);
    assert_eq!(common::count_domains(&pool).await, 3);
}

#[sqlx::test]
async fn test_append_conflict_keeps_siblings(pool: SqlitePool) {
    common::insert_domain(&pool, "a.com").await;
    let service = common::create_test_service(pool.clone());

    let result = service.append(names(&["a.com", "c.com"])).await.unwrap();

    assert_eq!(result.status(), BatchStatus::Partial);
    assert_eq!(
        result.failed,
        vec![ItemOutcome::Conflict {
            index: 0,
            name: "a.com".to_string()
        }]
    );
    assert!(common::domain_exists(&pool, "c.com").await);
    assert_eq!(common::count_domains(&pool).await, 2);
}

#[sqlx::test]
async fn test_append_replay_conflicts_everything(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());
    let batch = names(&["a.com", "b.com"]);

    service.append(batch.clone()).await.unwrap();
    let before = common::count_domains(&pool).await;

    let result = service.append(batch).await.unwrap();

    assert_eq!(result.status(), BatchStatus::Failure);
    assert!(result.applied.is_empty());
    assert_eq!(common::count_domains(&pool).await, before);
}

#[sqlx::test]
async fn test_append_duplicate_within_batch(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let result = service
        .append(names(&["a.com", "b.com", "a.com"]))
        .await
        .unwrap();

    assert_eq!(result.status(), BatchStatus::Partial);
    assert_eq!(
        result.failed,
        vec![ItemOutcome::Conflict {
            index: 2,
            name: "a.com".to_string()
        }]
    );
    assert_eq!(common::count_domains(&pool).await, 2);
}

#[sqlx::test]
async fn test_remove_duplicate_within_batch(pool: SqlitePool) {
    common::insert_domain(&pool, "a.com").await;
    let service = common::create_test_service(pool.clone());

    let result = service.remove(names(&["a.com", "a.com"])).await.unwrap();

    assert_eq!(result.status(), BatchStatus::Partial);
    assert_eq!(
        result.failed,
        vec![ItemOutcome::Missing {
            index: 1,
            name: "a.com".to_string()
        }]
    );
    assert_eq!(common::count_domains(&pool).await, 0);
}

#[sqlx::test]
async fn test_remove_mixed_is_partial(pool: SqlitePool) {
    common::insert_domain(&pool, "a.com").await;
    common::insert_domain(&pool, "b.com").await;
    let service = common::create_test_service(pool.clone());

    let result = service.remove(names(&["a.com", "z.com"])).await.unwrap();

    assert_eq!(result.status(), BatchStatus::Partial);
    assert_eq!(result.applied.len(), 1);
    assert_eq!(result.failed[0].index(), 1);
    assert!(!common::domain_exists(&pool, "a.com").await);
    assert!(common::domain_exists(&pool, "b.com").await);
}

#[sqlx::test]
async fn test_empty_batch_changes_nothing(pool: SqlitePool) {
    common::insert_domain(&pool, "a.com").await;
    let service = common::create_test_service(pool.clone());

    let err = service.append(Vec::new()).await.unwrap_err();
    assert_eq!(err, AppError::Validation(ValidationError::NoItemsProvided));

    let err = service.remove(Vec::new()).await.unwrap_err();
    assert_eq!(err, AppError::Validation(ValidationError::NoItemsProvided));

    assert_eq!(common::count_domains(&pool).await, 1);
}

#[sqlx::test]
async fn test_check_reflects_batches(pool: SqlitePool) {
    let service = common::create_test_service(pool);

    assert!(!service.check_exists("a.com").await.unwrap());

    service.append(names(&["a.com"])).await.unwrap();
    assert!(service.check_exists("a.com").await.unwrap());

    service.remove(names(&["a.com"])).await.unwrap();
    assert!(!service.check_exists("a.com").await.unwrap());
}

#[sqlx::test]
async fn test_empty_string_is_stored_verbatim(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let result = service.append(names(&["", " spaced "])).await.unwrap();

    assert_eq!(result.status(), BatchStatus::Success);
    assert!(common::domain_exists(&pool, "").await);
    assert!(common::domain_exists(&pool, " spaced ").await);
}

#[sqlx::test]
async fn test_append_fatal_error_persists_nothing(pool: SqlitePool) {
    common::install_failing_trigger(&pool, "bad.com").await;
    let service = common::create_test_service(pool.clone());

    let err = service
        .append(names(&["a.com", "bad.com", "c.com"]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Internal { .. }));
    assert_eq!(common::count_domains(&pool).await, 0);
}

#[sqlx::test]
async fn test_remove_fatal_error_persists_nothing(pool: SqlitePool) {
    common::insert_domain(&pool, "a.com").await;
    common::insert_domain(&pool, "bad.com").await;
    common::install_failing_trigger(&pool, "bad.com").await;
    let service = common::create_test_service(pool.clone());

    let err = service
        .remove(names(&["a.com", "bad.com"]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Internal { .. }));
    assert!(common::domain_exists(&pool, "a.com").await);
    assert_eq!(common::count_domains(&pool).await, 2);
}
