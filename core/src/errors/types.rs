//! Error types for authentication and token operations

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Inactive user")]
    InactiveUser,

    #[error("Password hashing failed")]
    PasswordHashing,
}

/// Why a token was rejected.
///
/// Callers receive every kind through the single [`TokenError::InvalidToken`]
/// variant and must treat them alike; the kind exists for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenKind {
    /// The claim's expiry is not after the verification time
    Expired,
    /// Not a well-formed JWT, or required claims are missing
    Malformed,
    /// The signature does not match the header and payload
    BadSignature,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken(InvalidTokenKind),

    #[error("Token generation failed")]
    Generation,
}

impl TokenError {
    /// The rejection kind, when this is an `InvalidToken` error
    pub fn invalid_kind(&self) -> Option<InvalidTokenKind> {
        match self {
            TokenError::InvalidToken(kind) => Some(*kind),
            TokenError::Generation => None,
        }
    }
}
