//! Token claims for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Default access token lifetime (30 minutes)
pub const DEFAULT_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Claims structure for JWT payload
///
/// Only the subject and expiry are carried, so a token is a pure function of
/// `(sub, exp, secret)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Expiration timestamp (seconds since the Unix epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `subject` expiring `duration` after `issued_at`
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn new(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        duration: Duration,
    ) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(duration)?;
        Some(Self {
            sub: subject.into(),
            exp: expires_at.timestamp(),
        })
    }

    /// Expiry as a timestamp, `None` when `exp` is out of range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Valid strictly before the expiry second
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() < self.exp
    }
}
