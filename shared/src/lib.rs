//! Shared utilities and common types for the CMEI App server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Pagination parameters for list endpoints

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig, MAX_ACCESS_TOKEN_EXPIRY_SECONDS,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::Pagination;
