//! Database connection pool management
//!
//! Wraps a SQLx SQLite pool with the settings from [`DatabaseConfig`]:
//! pool size, acquire timeout, statement logging and foreign key enforcement.

use log::LevelFilter;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Row, SqlitePool};
use std::str::FromStr;
use std::time::{Duration, Instant};

use cmei_shared::DatabaseConfig;

use super::schema;
use crate::InfrastructureError;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx SQLite connection pool
    pool: SqlitePool,
    /// Configuration used to create this pool
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// The database file is created when missing. An in-memory URL keeps its
    /// connections open for the lifetime of the pool, since closing the last
    /// one discards the data.
    ///
    /// # Example
    /// ```no_run
    /// use cmei_infra::database::DatabasePool;
    /// use cmei_shared::DatabaseConfig;
    ///
    /// async fn create_pool() -> Result<DatabasePool, Box<dyn std::error::Error>> {
    ///     let pool = DatabasePool::new(&DatabaseConfig::new("sqlite://cmei_app.db")).await?;
    ///     Ok(pool)
    /// }
    /// ```
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Creating database connection pool for {} with max_connections: {}",
            config.masked_url(),
            config.max_connections
        );

        let statement_level = if config.enable_logging {
            LevelFilter::Debug
        } else {
            LevelFilter::Off
        };

        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true)
            .log_statements(statement_level)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            );

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.connect_timeout));

        if is_in_memory(&config.url) {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self {
            pool,
            config: config.clone(),
        })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Connection URL with credentials masked
    pub fn masked_url(&self) -> String {
        self.config.masked_url()
    }

    /// Create every table that does not exist yet
    pub async fn create_schema(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Creating database schema");

        for statement in schema::STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await.map_err(|e| {
                tracing::error!("Schema statement failed: {}", e);
                InfrastructureError::Database(e)
            })?;
        }

        tracing::info!("Database schema ready ({} tables)", schema::TABLES.len());
        Ok(())
    }

    /// Round-trip a `SELECT 1` and report how long it took
    pub async fn health_check(&self) -> Result<Duration, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let started = Instant::now();
        let row = sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;
        let latency = started.elapsed();

        let value: i64 = row.try_get(0)?;
        if value != 1 {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            return Err(InfrastructureError::Config(format!(
                "Health check returned {} instead of 1",
                value
            )));
        }

        tracing::debug!("Database health check passed in {:?}", latency);
        Ok(latency)
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Connection pool statistics
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
