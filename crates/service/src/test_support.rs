#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh SQLite in-memory database with all migrations applied.
///
/// The pool is pinned to one connection so every query sees the same
/// in-memory database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    models::db::connect_and_migrate(&cfg).await
}
