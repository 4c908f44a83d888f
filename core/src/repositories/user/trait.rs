//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations translate storage failures into
/// [`DomainError::Internal`]; a missing row is `Ok(None)`, never an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their numeric identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by login name
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No account with that username
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user and return it with its assigned id
    ///
    /// Fails with [`DomainError::Validation`] when the e-mail is already taken.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
