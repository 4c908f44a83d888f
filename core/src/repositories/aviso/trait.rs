//! Notice repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cmei_shared::Pagination;

use crate::domain::entities::aviso::{Aviso, NewAviso};
use crate::errors::DomainError;

/// Persistence operations for notices
#[async_trait]
pub trait AvisoRepository: Send + Sync {
    /// Insert a notice written by `author_id`
    async fn create(
        &self,
        aviso: &NewAviso,
        author_id: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Aviso, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Aviso>, DomainError>;

    /// Notices ordered by id, honouring `skip`/`limit`
    async fn list(&self, pagination: Pagination) -> Result<Vec<Aviso>, DomainError>;

    /// Overwrite the mutable columns of an existing notice
    ///
    /// Returns `Ok(None)` when no notice has `aviso.id`.
    async fn update(&self, aviso: &Aviso) -> Result<Option<Aviso>, DomainError>;

    /// Returns `true` if a row was deleted
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
