//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{JwtConfig, MAX_ACCESS_TOKEN_EXPIRY_SECONDS};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Errors raised while validating the assembled configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-default value in {0}")]
    DefaultJwtSecret(Environment),

    #[error("JWT secret must not be empty")]
    EmptyJwtSecret,

    #[error(
        "Access token expiry must be between 1 and {max} seconds, got {0}",
        max = MAX_ACCESS_TOKEN_EXPIRY_SECONDS
    )]
    InvalidTokenExpiry(i64),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Create the `lucas` test account on startup
    #[serde(default)]
    pub seed_test_user: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            logging: LoggingConfig::for_environment(env),
            seed_test_user: !env.is_production(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let seed_test_user = std::env::var("SEED_TEST_USER")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(!environment.is_production());

        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
            seed_test_user,
        }
    }

    /// Check the configuration for values that must not reach a running server
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::EmptyJwtSecret);
        }
        if !(1..=MAX_ACCESS_TOKEN_EXPIRY_SECONDS).contains(&self.jwt.access_token_expiry) {
            return Err(ConfigError::InvalidTokenExpiry(self.jwt.access_token_expiry));
        }
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultJwtSecret(self.environment));
        }
        Ok(())
    }
}

/// Parse common boolean spellings used in environment variables
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
