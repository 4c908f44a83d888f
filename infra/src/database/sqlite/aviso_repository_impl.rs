//! SQLite implementation of the AvisoRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use cmei_core::domain::entities::aviso::{Aviso, NewAviso};
use cmei_core::errors::DomainError;
use cmei_core::repositories::AvisoRepository;
use cmei_shared::Pagination;

use super::db_error;

const SELECT_AVISO: &str = r#"
    SELECT id, title, content, created_at, updated_at, author_id, target_classroom
    FROM avisos
"#;

/// SQLite implementation of AvisoRepository
pub struct SqliteAvisoRepository {
    pool: SqlitePool,
}

impl SqliteAvisoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_aviso(row: &SqliteRow) -> Result<Aviso, DomainError> {
        Ok(Aviso {
            id: row.try_get("id").map_err(db_error("get id"))?,
            title: row.try_get("title").map_err(db_error("get title"))?,
            content: row.try_get("content").map_err(db_error("get content"))?,
            created_at: row.try_get("created_at").map_err(db_error("get created_at"))?,
            updated_at: row.try_get("updated_at").map_err(db_error("get updated_at"))?,
            author_id: row.try_get("author_id").map_err(db_error("get author_id"))?,
            target_classroom: row
                .try_get("target_classroom")
                .map_err(db_error("get target_classroom"))?,
        })
    }
}

#[async_trait]
impl AvisoRepository for SqliteAvisoRepository {
    async fn create(
        &self,
        aviso: &NewAviso,
        author_id: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Aviso, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO avisos (title, content, created_at, author_id, target_classroom)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&aviso.title)
        .bind(&aviso.content)
        .bind(created_at)
        .bind(author_id)
        .bind(&aviso.target_classroom)
        .execute(&self.pool)
        .await
        .map_err(db_error("create aviso"))?;

        Ok(Aviso {
            id: result.last_insert_rowid(),
            title: aviso.title.clone(),
            content: aviso.content.clone(),
            created_at,
            updated_at: None,
            author_id,
            target_classroom: aviso.target_classroom.clone(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Aviso>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_AVISO);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("find aviso"))?;

        row.as_ref().map(Self::row_to_aviso).transpose()
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Aviso>, DomainError> {
        let query = format!("{} ORDER BY id LIMIT ? OFFSET ?", SELECT_AVISO);
        let rows = sqlx::query(&query)
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list avisos"))?;

        rows.iter().map(Self::row_to_aviso).collect()
    }

    async fn update(&self, aviso: &Aviso) -> Result<Option<Aviso>, DomainError> {
        // id, author_id and created_at are never written after insert
        let result = sqlx::query(
            r#"
            UPDATE avisos
            SET title = ?, content = ?, updated_at = ?, target_classroom = ?
            WHERE id = ?
            "#,
        )
        .bind(&aviso.title)
        .bind(&aviso.content)
        .bind(aviso.updated_at)
        .bind(&aviso.target_classroom)
        .bind(aviso.id)
        .execute(&self.pool)
        .await
        .map_err(db_error("update aviso"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(aviso.id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM avisos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("delete aviso"))?;

        Ok(result.rows_affected() > 0)
    }
}
