//! SQLite implementation of the SaudeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use cmei_core::domain::entities::saude::{NewSaudeRecord, SaudeRecord};
use cmei_core::errors::DomainError;
use cmei_core::repositories::SaudeRepository;
use cmei_shared::Pagination;

use super::db_error;

pub struct SqliteSaudeRepository {
    pool: SqlitePool,
}

impl SqliteSaudeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &SqliteRow) -> Result<SaudeRecord, DomainError> {
        Ok(SaudeRecord {
            id: row.try_get("id").map_err(db_error("get id"))?,
            date: row.try_get("date").map_err(db_error("get date"))?,
            child_id: row.try_get("child_id").map_err(db_error("get child_id"))?,
            medication: row.try_get("medicacao").map_err(db_error("get medicacao"))?,
            symptoms: row.try_get("sintomas").map_err(db_error("get sintomas"))?,
            notes: row.try_get("observacoes").map_err(db_error("get observacoes"))?,
            temperature: row.try_get("temperatura").map_err(db_error("get temperatura"))?,
        })
    }
}

#[async_trait]
impl SaudeRepository for SqliteSaudeRepository {
    async fn create(
        &self,
        record: &NewSaudeRecord,
        date: DateTime<Utc>,
    ) -> Result<SaudeRecord, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO saude_records (date, child_id, medicacao, sintomas, observacoes, temperatura)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(date)
        .bind(record.child_id)
        .bind(&record.medication)
        .bind(&record.symptoms)
        .bind(&record.notes)
        .bind(record.temperature)
        .execute(&self.pool)
        .await
        .map_err(db_error("create saude record"))?;

        Ok(SaudeRecord {
            id: result.last_insert_rowid(),
            date,
            child_id: record.child_id,
            medication: record.medication.clone(),
            symptoms: record.symptoms.clone(),
            notes: record.notes.clone(),
            temperature: record.temperature,
        })
    }

    async fn list(
        &self,
        child_id: Option<i64>,
        pagination: Pagination,
    ) -> Result<Vec<SaudeRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, child_id, medicacao, sintomas, observacoes, temperatura
            FROM saude_records
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
        .map_err(db_error("list saude records"))?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
