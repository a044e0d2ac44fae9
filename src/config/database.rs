//! Database connection pool initialization.
//!
//! Reads `DATABASE_URL` and connects a single [`PgPool`] shared by every
//! request handler. Embedded migrations from `migrations/` are applied
//! before the pool is handed out, so the schema always matches the row
//! types in `modules/*/model.rs`.
//!
//! # Panics
//!
//! Panics if `DATABASE_URL` is unset, the database is unreachable, or a
//! migration fails. All three are startup-fatal.

use sqlx::PgPool;
use std::env;

pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
