//! User entity representing an account in the CMEI system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents the role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Parent or guardian of one or more children
    Parent,
    /// Teacher or classroom staff
    Teacher,
    /// School administration
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Parent => "parent",
            UserType::Teacher => "teacher",
            UserType::Admin => "admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(UserType::Parent),
            "teacher" => Ok(UserType::Teacher),
            "admin" => Ok(UserType::Admin),
            other => Err(format!("Unknown user type: {}", other)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Login name
    pub username: String,

    /// Unique e-mail address
    pub email: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub hashed_password: String,

    /// Display name
    pub full_name: String,

    /// Role of the user
    pub user_type: UserType,

    /// Whether the account may use the API
    pub active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub full_name: String,
    pub user_type: UserType,
    pub active: bool,
}
