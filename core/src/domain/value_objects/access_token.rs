//! Access token value object returned by the login flow.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// `token_type` reported to OAuth2-style clients
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// A freshly issued bearer token
///
/// Serializes to the `{"access_token": ..., "token_type": "bearer"}` shape
/// clients expect from the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    /// Signed JWT
    pub access_token: String,

    /// Always `"bearer"`
    pub token_type: String,

    /// When the token stops verifying
    #[serde(skip_serializing)]
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn bearer(access_token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_at,
        }
    }

    /// Seconds of validity left at `now`, never negative
    pub fn expires_in(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}
