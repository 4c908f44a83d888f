//! Password hashing helpers

use crate::errors::{AuthError, DomainError};

/// Work factor used for new hashes
pub const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash a plain-text password with bcrypt
pub fn hash_password(plain: &str) -> Result<String, DomainError> {
    bcrypt::hash(plain, BCRYPT_COST).map_err(|e| {
        tracing::error!(error = %e, "Failed to hash password");
        DomainError::Auth(AuthError::PasswordHashing)
    })
}

/// Check `plain` against a bcrypt hash; a malformed hash never matches
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}
