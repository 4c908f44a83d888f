//! SQLite implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use cmei_core::domain::entities::user::{NewUser, User, UserType};
use cmei_core::errors::DomainError;
use cmei_core::repositories::UserRepository;

use super::db_error;

const SELECT_USER: &str = r#"
    SELECT id, username, email, hashed_password, full_name, user_type, active, created_at
    FROM users
"#;

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &SqliteRow) -> Result<User, DomainError> {
        let user_type: String = row.try_get("user_type").map_err(db_error("get user_type"))?;

        Ok(User {
            id: row.try_get("id").map_err(db_error("get id"))?,
            username: row.try_get("username").map_err(db_error("get username"))?,
            email: row.try_get("email").map_err(db_error("get email"))?,
            hashed_password: row
                .try_get("hashed_password")
                .map_err(db_error("get hashed_password"))?,
            full_name: row.try_get("full_name").map_err(db_error("get full_name"))?,
            user_type: user_type
                .parse::<UserType>()
                .map_err(|message| DomainError::Internal { message })?,
            active: row.try_get("active").map_err(db_error("get active"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error("get created_at"))?,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_USER);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("find user by id"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE username = ? ORDER BY id LIMIT 1", SELECT_USER);
        let row = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("find user by username"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (
                username, email, hashed_password, full_name, user_type, active, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .bind(&user.full_name)
        .bind(user.user_type.as_str())
        .bind(user.active)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return DomainError::Validation {
                        message: "Email already registered".to_string(),
                    };
                }
            }
            db_error("create user")(e)
        })?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: user.username,
            email: user.email,
            hashed_password: user.hashed_password,
            full_name: user.full_name,
            user_type: user.user_type,
            active: user.active,
            created_at,
        })
    }
}
