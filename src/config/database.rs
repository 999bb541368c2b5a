//! Database connection pool initialization.
//!
//! The pool is acquired once at startup, embedded migrations are applied,
//! and the pool is then shared read-only by all request handlers through
//! [`crate::state::AppState`]. Lookups that never return eventually fail
//! with the pool's own deadline error rather than hanging a request.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;

/// Connects to PostgreSQL and runs pending migrations.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, the connection cannot be
/// established, or a migration fails. Startup-only.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
