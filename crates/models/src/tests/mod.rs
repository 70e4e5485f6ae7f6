
/// Upsert semantics of the `data_processor` table
pub mod crud_tests;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, ensure_schema};

/// Fresh in-memory SQLite database with the schema applied.
///
/// The pool is pinned to one connection: every SQLite in-memory connection
/// is its own database.
pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
