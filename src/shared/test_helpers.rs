#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::Router;

#[cfg(test)]
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

#[cfg(test)]
use crate::features::villas::{routes, VillaService};

/// Migrated in-memory SQLite pool. A single connection keeps every query on
/// the same in-memory database.
#[cfg(test)]
pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[cfg(test)]
pub fn villa_router(pool: SqlitePool) -> Router {
    routes::routes(Arc::new(VillaService::new(pool)))
}
