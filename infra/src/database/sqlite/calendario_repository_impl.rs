//! SQLite implementation of the CalendarioRepository trait.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use cmei_core::domain::entities::calendario::{
    CalendarioEvento, CalendarioFilter, NewCalendarioEvento,
};
use cmei_core::errors::DomainError;
use cmei_core::repositories::CalendarioRepository;

use super::db_error;

pub struct SqliteCalendarioRepository {
    pool: SqlitePool,
}

impl SqliteCalendarioRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_evento(row: &SqliteRow) -> Result<CalendarioEvento, DomainError> {
        Ok(CalendarioEvento {
            id: row.try_get("id").map_err(db_error("get id"))?,
            title: row.try_get("title").map_err(db_error("get title"))?,
            description: row.try_get("description").map_err(db_error("get description"))?,
            start_date: row.try_get("start_date").map_err(db_error("get start_date"))?,
            end_date: row.try_get("end_date").map_err(db_error("get end_date"))?,
            all_day: row.try_get("all_day").map_err(db_error("get all_day"))?,
            recurrence: row.try_get("recurrence").map_err(db_error("get recurrence"))?,
        })
    }
}

#[async_trait]
impl CalendarioRepository for SqliteCalendarioRepository {
    async fn create(&self, evento: &NewCalendarioEvento) -> Result<CalendarioEvento, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO calendario_eventos (title, description, start_date, end_date, all_day, recurrence)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&evento.title)
        .bind(&evento.description)
        .bind(evento.start_date)
        .bind(evento.end_date)
        .bind(evento.all_day)
        .bind(&evento.recurrence)
        .execute(&self.pool)
        .await
        .map_err(db_error("create calendario evento"))?;

        Ok(CalendarioEvento {
            id: result.last_insert_rowid(),
            title: evento.title.clone(),
            description: evento.description.clone(),
            start_date: evento.start_date,
            end_date: evento.end_date,
            all_day: evento.all_day,
            recurrence: evento.recurrence.clone(),
        })
    }

    async fn list(&self, filter: &CalendarioFilter) -> Result<Vec<CalendarioEvento>, DomainError> {
        // Window applied with `CalendarioFilter::matches`
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, start_date, end_date, all_day, recurrence
            FROM calendario_eventos
            ORDER BY start_date, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list calendario eventos"))?;

        let mut eventos = Vec::with_capacity(rows.len());
        for row in &rows {
            let evento = Self::row_to_evento(row)?;
            if filter.matches(&evento) {
                eventos.push(evento);
            }
        }
        eventos.sort_by_key(|e| (e.start_date, e.id));
        Ok(eventos)
    }
}
