//! Token service module for JWT management
//!
//! Issues and verifies HS256-signed access tokens carrying only the subject
//! and its expiry. Nothing is persisted: a token is valid exactly while its
//! signature checks out and the verification time is before `exp`.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
