//! SQLite implementation of the ChildRepository trait.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use cmei_core::domain::entities::child::{Child, ChildParentLink, NewChild};
use cmei_core::errors::DomainError;
use cmei_core::repositories::ChildRepository;
use cmei_shared::Pagination;

use super::db_error;

pub struct SqliteChildRepository {
    pool: SqlitePool,
}

impl SqliteChildRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_child(row: &SqliteRow) -> Result<Child, DomainError> {
        Ok(Child {
            id: row.try_get("id").map_err(db_error("get id"))?,
            name: row.try_get("name").map_err(db_error("get name"))?,
            birth_date: row.try_get("birth_date").map_err(db_error("get birth_date"))?,
            classroom: row.try_get("classroom").map_err(db_error("get classroom"))?,
        })
    }
}

#[async_trait]
impl ChildRepository for SqliteChildRepository {
    async fn create(&self, child: &NewChild) -> Result<Child, DomainError> {
        let result =
            sqlx::query("INSERT INTO children (name, birth_date, classroom) VALUES (?, ?, ?)")
                .bind(&child.name)
                .bind(child.birth_date)
                .bind(&child.classroom)
                .execute(&self.pool)
                .await
                .map_err(db_error("create child"))?;

        Ok(Child {
            id: result.last_insert_rowid(),
            name: child.name.clone(),
            birth_date: child.birth_date,
            classroom: child.classroom.clone(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Child>, DomainError> {
        let row = sqlx::query("SELECT id, name, birth_date, classroom FROM children WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("find child"))?;

        row.as_ref().map(Self::row_to_child).transpose()
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Child>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, name, birth_date, classroom FROM children ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(pagination.limit_i64())
        .bind(pagination.offset_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list children"))?;

        rows.iter().map(Self::row_to_child).collect()
    }

    async fn link_parent(&self, link: ChildParentLink) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO child_parent_links (parent_id, child_id) VALUES (?, ?)",
        )
        .bind(link.parent_id)
        .bind(link.child_id)
        .execute(&self.pool)
        .await
        .map_err(db_error("link parent"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_parent(&self, parent_id: i64) -> Result<Vec<Child>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.name, c.birth_date, c.classroom
            FROM children c
            JOIN child_parent_links l ON l.child_id = c.id
            WHERE l.parent_id = ?
            ORDER BY c.id
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("find children of parent"))?;

        rows.iter().map(Self::row_to_child).collect()
    }
}
