//! Health record repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cmei_shared::Pagination;

use crate::domain::entities::saude::{NewSaudeRecord, SaudeRecord};
use crate::errors::DomainError;

/// Persistence operations for health records
#[async_trait]
pub trait SaudeRepository: Send + Sync {
    /// Insert a record dated `date`; `record.date` is ignored
    async fn create(
        &self,
        record: &NewSaudeRecord,
        date: DateTime<Utc>,
    ) -> Result<SaudeRecord, DomainError>;

    /// Records ordered by id, optionally restricted to one child
    async fn list(
        &self,
        child_id: Option<i64>,
        pagination: Pagination,
    ) -> Result<Vec<SaudeRecord>, DomainError>;
}

#[cfg(test)]
pub use mock::MockSaudeRepository;
