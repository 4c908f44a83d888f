//! Health records

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cmei_shared::Pagination;

use crate::domain::entities::saude::{NewSaudeRecord, SaudeRecord, MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ChildRepository, SaudeRepository};

pub struct SaudeService {
    records: Arc<dyn SaudeRepository>,
    children: Arc<dyn ChildRepository>,
}

impl SaudeService {
    pub fn new(records: Arc<dyn SaudeRepository>, children: Arc<dyn ChildRepository>) -> Self {
        Self { records, children }
    }

    pub async fn record(&self, record: NewSaudeRecord) -> DomainResult<SaudeRecord> {
        self.record_at(record, Utc::now()).await
    }

    /// Store a health entry for an existing child
    ///
    /// A temperature outside 30.0..=45.0 °C is rejected.
    pub async fn record_at(
        &self,
        record: NewSaudeRecord,
        now: DateTime<Utc>,
    ) -> DomainResult<SaudeRecord> {
        if !record.has_plausible_temperature() {
            return Err(DomainError::validation(format!(
                "temperatura must be between {} and {}",
                MIN_TEMPERATURE, MAX_TEMPERATURE
            )));
        }
        if self.children.find_by_id(record.child_id).await?.is_none() {
            return Err(DomainError::not_found("Child"));
        }

        let date = record.date.unwrap_or(now);
        let created = self.records.create(&record, date).await?;
        tracing::debug!(record_id = created.id, child_id = created.child_id, "Saude record stored");
        Ok(created)
    }

    pub async fn list(
        &self,
        child_id: Option<i64>,
        pagination: Pagination,
    ) -> DomainResult<Vec<SaudeRecord>> {
        self.records.list(child_id, pagination.validate()).await
    }
}
