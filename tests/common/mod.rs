#![allow(dead_code)]

use domain_blocklist::application::services::BlocklistService;
use domain_blocklist::infrastructure::persistence::SqliteBlocklistRepository;
use domain_blocklist::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub async fn insert_domain(pool: &SqlitePool, name: &str) {
    sqlx::query("INSERT INTO blocked_domains (domain_name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_domains(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM blocked_domains")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn domain_exists(pool: &SqlitePool, name: &str) -> bool {
    let found: i64 =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM blocked_domains WHERE domain_name = ?)")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap();
    found != 0
}

pub fn create_test_service(pool: SqlitePool) -> BlocklistService<SqliteBlocklistRepository> {
    let repository = Arc::new(SqliteBlocklistRepository::new(Arc::new(pool)));
    BlocklistService::new(repository)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_test_service(pool)))
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Makes any insert or delete of `name` fail with a non-unique constraint error.
pub async fn install_failing_trigger(pool: &SqlitePool, name: &str) {
    for (trigger, event) in [("reject_insert", "INSERT"), ("reject_delete", "DELETE")] {
        let row = if event == "INSERT" { "NEW" } else { "OLD" };
        let sql = format!(
            "CREATE TRIGGER {trigger} BEFORE {event} ON blocked_domains \
             WHEN {row}.domain_name = '{name}' \
             BEGIN SELECT RAISE(ABORT, 'trigger rejected {name}'); END"
        );
        sqlx::query(&sql).execute(pool).await.unwrap();
    }
}
