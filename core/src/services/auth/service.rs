//! Main authentication service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::domain::value_objects::AccessToken;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Authentication service for login and current-user resolution
pub struct AuthService {
    /// User repository for account lookups
    user_repository: Arc<dyn UserRepository>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Issue an access token for `username`.
    ///
    /// The password is accepted as-is and never checked against the stored
    /// hash; the account does not even need to exist.
    pub fn login_at(
        &self,
        username: &str,
        _password: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<AccessToken> {
        // The subject is signed exactly as submitted.
        if username.trim().is_empty() {
            return Err(DomainError::validation("Username is required"));
        }

        let expiry = self.token_service.default_expiry();
        let expires_at = now
            .checked_add_signed(expiry)
            .ok_or_else(|| DomainError::validation("Token expiry is out of range"))?;
        let token = self.token_service.issue_at(username, Some(expiry), now)?;

        tracing::info!(username = %username, "Issued access token");
        Ok(AccessToken::bearer(token, expires_at))
    }

    pub fn login(&self, username: &str, password: &str) -> DomainResult<AccessToken> {
        self.login_at(username, password, Utc::now())
    }

    /// Resolve the active account a token was issued for
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidToken` - token rejected
    /// * `DomainError::Unauthorized` - no account with the token's subject
    /// * `AuthError::InactiveUser` - account disabled
    pub async fn current_user_at(&self, token: &str, now: DateTime<Utc>) -> DomainResult<User> {
        let username = self.token_service.verify_at(token, now)?;
        self.active_user(&username).await
    }

    pub async fn current_user(&self, token: &str) -> DomainResult<User> {
        self.current_user_at(token, Utc::now()).await
    }

    /// Load an active account by username
    pub async fn active_user(&self, username: &str) -> DomainResult<User> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        if !user.active {
            tracing::warn!(user_id = user.id, "Inactive user presented a valid token");
            return Err(AuthError::InactiveUser.into());
        }

        Ok(user)
    }
}
