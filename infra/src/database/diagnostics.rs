//! Database statistics reported by the health endpoint

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};
use std::collections::BTreeMap;

use crate::InfrastructureError;

/// Snapshot of the database contents
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseStats {
    /// User tables, sorted by name
    pub tables: Vec<String>,
    pub record_counts: BTreeMap<String, i64>,
    /// Columns of the `avisos` table
    pub avisos_schema: Vec<ColumnInfo>,
    pub latest_aviso: Option<AvisoSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

/// The most recently inserted notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvisoSummary {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Gather table names, row counts and the latest notice
pub async fn collect_stats(pool: &SqlitePool) -> Result<DatabaseStats, InfrastructureError> {
    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    let mut record_counts = BTreeMap::new();
    for table in &tables {
        // Names come from sqlite_master, quoting guards odd identifiers
        let query = format!("SELECT COUNT(*) FROM \"{}\"", table.replace('"', "\"\""));
        let count: i64 = sqlx::query_scalar(&query).fetch_one(pool).await?;
        record_counts.insert(table.clone(), count);
    }

    let mut avisos_schema = Vec::new();
    let mut latest_aviso = None;
    if tables.iter().any(|t| t == "avisos") {
        for row in sqlx::query("PRAGMA table_info(avisos)").fetch_all(pool).await? {
            avisos_schema.push(ColumnInfo {
                name: row.try_get("name")?,
                column_type: row.try_get("type")?,
            });
        }

        latest_aviso = sqlx::query("SELECT id, title, created_at FROM avisos ORDER BY id DESC LIMIT 1")
            .fetch_optional(pool)
            .await?
            .map(|row| -> Result<AvisoSummary, sqlx::Error> {
                Ok(AvisoSummary {
                    id: row.try_get("id")?,
                    title: row.try_get("title")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .transpose()?;
    }

    Ok(DatabaseStats {
        tables,
        record_counts,
        avisos_schema,
        latest_aviso,
    })
}
