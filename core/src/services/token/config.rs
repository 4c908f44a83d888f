//! Configuration for the token service

use std::str::FromStr;

use chrono::Duration;
use cmei_shared::{JwtConfig, MAX_ACCESS_TOKEN_EXPIRY_SECONDS};
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_MINUTES;
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm, HMAC family only
    pub algorithm: Algorithm,
    /// Lifetime used when the caller does not pass one
    pub access_token_expiry_seconds: i64,
}

impl TokenServiceConfig {
    /// HS256 with the default 30 minute lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_MINUTES * 60,
        }
    }

    /// Build from the application's JWT settings
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            DomainError::validation(format!("Unsupported JWT algorithm: {}", config.algorithm))
        })?;

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_expiry_seconds: config.access_token_expiry,
        })
    }

    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_seconds = minutes.saturating_mul(60);
        self
    }

    /// The default lifetime, `None` unless it lies within one second and
    /// [`MAX_ACCESS_TOKEN_EXPIRY_SECONDS`]
    pub fn default_expiry(&self) -> Option<Duration> {
        if !(1..=MAX_ACCESS_TOKEN_EXPIRY_SECONDS).contains(&self.access_token_expiry_seconds) {
            return None;
        }
        Duration::try_seconds(self.access_token_expiry_seconds)
    }
}
