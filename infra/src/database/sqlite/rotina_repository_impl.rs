//! SQLite implementation of the RotinaRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use cmei_core::domain::entities::rotina::{NewRotina, Rotina};
use cmei_core::errors::DomainError;
use cmei_core::repositories::RotinaRepository;
use cmei_shared::Pagination;

use super::db_error;

pub struct SqliteRotinaRepository {
    pool: SqlitePool,
}

impl SqliteRotinaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_rotina(row: &SqliteRow) -> Result<Rotina, DomainError> {
        Ok(Rotina {
            id: row.try_get("id").map_err(db_error("get id"))?,
            date: row.try_get("date").map_err(db_error("get date"))?,
            child_id: row.try_get("child_id").map_err(db_error("get child_id"))?,
            meals: row.try_get("alimentacao").map_err(db_error("get alimentacao"))?,
            sleep: row.try_get("sono").map_err(db_error("get sono"))?,
            activities: row.try_get("atividades").map_err(db_error("get atividades"))?,
            notes: row.try_get("observacoes").map_err(db_error("get observacoes"))?,
        })
    }
}

#[async_trait]
impl RotinaRepository for SqliteRotinaRepository {
    async fn create(&self, rotina: &NewRotina, date: DateTime<Utc>) -> Result<Rotina, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO rotinas (date, child_id, alimentacao, sono, atividades, observacoes)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(date)
        .bind(rotina.child_id)
        .bind(&rotina.meals)
        .bind(&rotina.sleep)
        .bind(&rotina.activities)
        .bind(&rotina.notes)
        .execute(&self.pool)
        .await
        .map_err(db_error("create rotina"))?;

        Ok(Rotina {
            id: result.last_insert_rowid(),
            date,
            child_id: rotina.child_id,
            meals: rotina.meals.clone(),
            sleep: rotina.sleep.clone(),
            activities: rotina.activities.clone(),
            notes: rotina.notes.clone(),
        })
    }

    async fn list(
        &self,
        child_id: Option<i64>,
        pagination: Pagination,
    ) -> Result<Vec<Rotina>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, child_id, alimentacao, sono, atividades, observacoes
            FROM rotinas
            WHERE (?1 IS NULL OR child_id = ?1)
            ORDER BY id
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(child_id)
        .bind(pagination.limit_i64())
        .bind(pagination.offset_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list rotinas"))?;

        rows.iter().map(Self::row_to_rotina).collect()
    }
}
