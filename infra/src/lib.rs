//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository traits on top of a
//! SQLite connection pool, plus the database diagnostics reported by the
//! health endpoint and the test-account seeding run at startup.

/// Database module - SQLite implementations using SQLx
pub mod database;

/// Startup data seeding
pub mod seed;

use cmei_shared::DatabaseConfig;

pub use database::{DatabasePool, PoolStatistics};
pub use seed::{create_test_user, TEST_USER_PASSWORD, TEST_USER_USERNAME};

/// Open the pool and make sure every table exists
///
/// Sets up:
/// - the SQLite connection pool (creating the database file if missing)
/// - the schema, idempotently
pub async fn initialize(config: &DatabaseConfig) -> Result<DatabasePool, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let pool = DatabasePool::new(config).await?;
    pool.create_schema().await?;

    tracing::info!("Infrastructure services initialized successfully");
    Ok(pool)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seeding the initial data failed
    #[error("Seed error: {0}")]
    Seed(String),
}
