//! Database module for the catalog server
//!
//! Contains entities, repositories, and the startup connection routine.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

pub mod product;
pub mod search_log;
pub mod user;

pub use product::{NewProduct, Product, ProductRepository, DEFAULT_IMAGE_MIME};
pub use search_log::SearchLog;
pub use user::{User, UserRepository};

/// Errors that can occur while establishing the database connection.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Migration execution failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect to Postgres and apply pending migrations.
///
/// Called once at startup; there is no reconnection or retry policy beyond
/// what the pool itself provides.
pub async fn connect(database_url: &str) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("database connected and migrations applied");

    Ok(pool)
}
