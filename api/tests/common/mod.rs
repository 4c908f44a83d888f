//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use actix_web::web;

use cmei_api::AppState;
use cmei_core::repositories::UserRepository;
use cmei_core::{NewUser, User, UserType};
use cmei_infra::database::SqliteUserRepository;
use cmei_shared::{AppConfig, DatabaseConfig, JwtConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Application state over a fresh in-memory database
pub async fn test_state() -> web::Data<AppState> {
    let mut config = AppConfig::default();
    config.database = DatabaseConfig::in_memory();
    config.jwt = JwtConfig::new(TEST_SECRET);

    let pool = cmei_infra::initialize(&config.database)
        .await
        .expect("in-memory database");
    web::Data::new(AppState::new(config, pool).expect("application state"))
}

/// Insert a user directly, skipping bcrypt
pub async fn insert_user(state: &AppState, username: &str, active: bool) -> User {
    let users = SqliteUserRepository::new(state.pool.get_pool().clone());
    users
        .create(NewUser {
            username: username.to_string(),
            email: format!("{}@test.com", username),
            hashed_password: "$2b$12$not-a-real-hash".to_string(),
            full_name: format!("{} Test User", username),
            user_type: UserType::Teacher,
            active,
        })
        .await
        .expect("user inserted")
}

/// `Authorization` header value for `username`
pub fn bearer(state: &AppState, username: &str) -> (&'static str, String) {
    let token = state
        .token_service
        .issue(username, None)
        .expect("token issued");
    ("Authorization", format!("Bearer {}", token))
}
