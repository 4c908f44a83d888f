//! Database module - SQLite implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Schema creation
//! - Repository pattern implementations
//! - Diagnostics for the health endpoint

pub mod connection;
pub mod diagnostics;
pub mod schema;
pub mod sqlite;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use diagnostics::{collect_stats, AvisoSummary, ColumnInfo, DatabaseStats};
pub use sqlite::{
    SqliteAvisoRepository, SqliteCalendarioRepository, SqliteChildRepository,
    SqliteRotinaRepository, SqliteSaudeRepository, SqliteUserRepository,
};
