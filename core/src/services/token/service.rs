//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use cmei_shared::MAX_ACCESS_TOKEN_EXPIRY_SECONDS;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, InvalidTokenKind, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies signed access tokens.
///
/// Holds only immutable keys, so a single instance can be shared across
/// worker threads behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    default_expiry: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - empty secret, a non-HMAC algorithm or a
    ///   default lifetime outside one second to 365 days
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::validation("JWT secret must not be empty"));
        }
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::validation(format!(
                "Unsupported JWT algorithm: {:?}",
                config.algorithm
            )));
        }
        let default_expiry = config.default_expiry().ok_or_else(|| {
            DomainError::validation(format!(
                "Token expiry must be between 1 and {} seconds",
                MAX_ACCESS_TOKEN_EXPIRY_SECONDS
            ))
        })?;

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked against the caller's clock in `verify_at`.
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            config,
            default_expiry,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Lifetime applied when `issue` is called without a duration
    pub fn default_expiry(&self) -> Duration {
        self.default_expiry
    }

    /// Signs a token for `subject` valid until `now + duration`.
    ///
    /// Issuing is pure: the same subject, expiry and secret always produce
    /// the same token.
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - empty subject, non-positive duration, or
    ///   an expiry past the representable date range
    /// * `TokenError::Generation` - signing failed
    pub fn issue_at(
        &self,
        subject: &str,
        duration: Option<Duration>,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        if subject.is_empty() {
            return Err(DomainError::validation("Token subject must not be empty"));
        }

        let duration = duration.unwrap_or(self.default_expiry);
        if duration <= Duration::zero() {
            return Err(DomainError::validation("Token duration must be positive"));
        }

        let claims = Claims::new(subject, now, duration)
            .ok_or_else(|| DomainError::validation("Token duration is too large"))?;
        self.encode_jwt(&claims)
    }

    /// [`issue_at`](Self::issue_at) using the current time
    pub fn issue(&self, subject: &str, duration: Option<Duration>) -> Result<String, DomainError> {
        self.issue_at(subject, duration, Utc::now())
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::Generation))
    }

    /// Verifies `token` as of `now` and returns its subject
    ///
    /// Every failure is `TokenError::InvalidToken`; the kind is only for
    /// diagnostics and must not change how callers respond.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        self.decode_claims(token, now).map_err(|kind| {
            tracing::debug!(kind = ?kind, "Rejected access token");
            TokenError::InvalidToken(kind)
        })
    }

    /// [`verify_at`](Self::verify_at) using the current time
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, Utc::now())
    }

    fn decode_claims(&self, token: &str, now: DateTime<Utc>) -> Result<String, InvalidTokenKind> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => InvalidTokenKind::BadSignature,
                _ => InvalidTokenKind::Malformed,
            })?;

        let claims = token_data.claims;
        if claims.sub.is_empty() {
            return Err(InvalidTokenKind::Malformed);
        }
        if !claims.is_valid_at(now) {
            return Err(InvalidTokenKind::Expired);
        }

        Ok(claims.sub)
    }
}
