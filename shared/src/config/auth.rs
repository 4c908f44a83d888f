//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Secret used when `JWT_SECRET` is not provided. Only acceptable outside production.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Default access token lifetime: 30 minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 30 * 60;

/// Longest accepted access token lifetime: 365 days
pub const MAX_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 365 * 24 * 60 * 60;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric key used to sign and verify tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS,
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS);

        Self {
            secret,
            access_token_expiry,
            algorithm: default_algorithm(),
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes.saturating_mul(60);
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
