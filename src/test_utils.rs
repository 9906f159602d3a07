use std::sync::Arc;

use sea_orm::ConnectOptions;

use crate::database::Database;

/// A migrated in-memory SQLite cache.
pub async fn test_db() -> Arc<Database> {
    // Every pooled connection would get its own in-memory database, so keep one
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect_with(opt)
        .await
        .unwrap_or_else(|e| panic!("Failed to create test database: {e}"));

    Arc::new(db)
}
