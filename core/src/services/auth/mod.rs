//! Authentication service module
//!
//! Login exchanges a username for a bearer token; the current user is
//! resolved from a presented token.

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{hash_password, verify_password, BCRYPT_COST};
pub use service::AuthService;
