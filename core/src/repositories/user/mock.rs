//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Store a user exactly as given, overwriting any user with the same id
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::validation("Email already registered"));
        }

        let id = users.keys().next_back().copied().unwrap_or(0) + 1;
        let created = User {
            id,
            username: user.username,
            email: user.email,
            hashed_password: user.hashed_password,
            full_name: user.full_name,
            user_type: user.user_type,
            active: user.active,
            created_at: Utc::now(),
        };
        users.insert(id, created.clone());
        Ok(created)
    }
}
