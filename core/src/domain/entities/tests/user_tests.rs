//! Unit tests for the user entity

use chrono::Utc;

use crate::domain::entities::user::{User, UserType};

#[test]
fn test_user_type_round_trips_through_str() {
    for ut in [UserType::Parent, UserType::Teacher, UserType::Admin] {
        assert_eq!(ut.as_str().parse::<UserType>().unwrap(), ut);
    }
    assert!("customer".parse::<UserType>().is_err());
}

#[test]
fn test_user_type_serializes_lowercase() {
    assert_eq!(serde_json::to_value(UserType::Teacher).unwrap(), "teacher");
}

#[test]
fn test_password_hash_never_serialized() {
    let user = User {
        id: 1,
        username: "lucas".to_string(),
        email: "lucas@test.com".to_string(),
        hashed_password: "$2b$12$secret".to_string(),
        full_name: "Lucas Test User".to_string(),
        user_type: UserType::Teacher,
        active: true,
        created_at: Utc::now(),
    };

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("hashed_password").is_none());
    assert_eq!(json["username"], "lucas");
    assert_eq!(json["user_type"], "teacher");
}
