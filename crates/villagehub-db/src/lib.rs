//! # VillageHub DB
//!
//! Builds the PostgreSQL pool. The pool is created once in `main` and handed
//! to every handler through the application state; nothing in the workspace
//! keeps a global connection.
//!
//! ```ignore
//! use villagehub_config::DatabaseConfig;
//! use villagehub_db::init_db_pool;
//!
//! let config = DatabaseConfig::from_env().expect("DATABASE_URL must be set");
//! let pool = init_db_pool(&config).await?;
//! ```

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use villagehub_config::DatabaseConfig;

pub use sqlx::PgPool;

/// Connects eagerly so start-up fails fast on a bad `DATABASE_URL`.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "Database pool ready");
    Ok(pool)
}

/// A pool that only opens connections on first use.
///
/// Used by tooling and by tests that exercise routes which never reach the
/// database.
pub fn lazy_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(1).connect_lazy(url)
}
