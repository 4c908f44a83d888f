//! Startup data seeding

use cmei_core::domain::entities::user::{NewUser, User, UserType};
use cmei_core::repositories::UserRepository;
use cmei_core::services::hash_password;

use crate::InfrastructureError;

pub const TEST_USER_USERNAME: &str = "lucas";
pub const TEST_USER_EMAIL: &str = "lucas@test.com";
pub const TEST_USER_PASSWORD: &str = "senha123";
pub const TEST_USER_FULL_NAME: &str = "Lucas Test User";

/// Create the `lucas` test account unless user id 1 already exists
///
/// Returns the created user, or `None` when nothing was done.
pub async fn create_test_user(
    users: &dyn UserRepository,
) -> Result<Option<User>, InfrastructureError> {
    let existing = users
        .find_by_id(1)
        .await
        .map_err(|e| InfrastructureError::Seed(e.to_string()))?;
    if existing.is_some() {
        tracing::debug!("Test user already present, skipping seed");
        return Ok(None);
    }

    let hashed_password =
        hash_password(TEST_USER_PASSWORD).map_err(|e| InfrastructureError::Seed(e.to_string()))?;

    let user = users
        .create(NewUser {
            username: TEST_USER_USERNAME.to_string(),
            email: TEST_USER_EMAIL.to_string(),
            hashed_password,
            full_name: TEST_USER_FULL_NAME.to_string(),
            user_type: UserType::Teacher,
            active: true,
        })
        .await
        .map_err(|e| InfrastructureError::Seed(e.to_string()))?;

    tracing::info!(user_id = user.id, "Test user '{}' created", user.username);
    Ok(Some(user))
}
