//! Notice publishing service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cmei_shared::Pagination;

use crate::domain::entities::aviso::{Aviso, AvisoChanges, NewAviso};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AvisoRepository;

const RESOURCE: &str = "Aviso";

/// CRUD over notices
pub struct AvisoService {
    repository: Arc<dyn AvisoRepository>,
}

impl AvisoService {
    pub fn new(repository: Arc<dyn AvisoRepository>) -> Self {
        Self { repository }
    }

    /// Publish a notice authored by `author_id`
    pub async fn create(&self, aviso: NewAviso, author_id: i64) -> DomainResult<Aviso> {
        self.create_at(aviso, author_id, Utc::now()).await
    }

    pub async fn create_at(
        &self,
        aviso: NewAviso,
        author_id: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<Aviso> {
        require_text("title", &aviso.title)?;
        require_text("content", &aviso.content)?;

        let created = self.repository.create(&aviso, author_id, now).await?;
        tracing::info!(aviso_id = created.id, author_id, "Aviso created");
        Ok(created)
    }

    pub async fn list(&self, pagination: Pagination) -> DomainResult<Vec<Aviso>> {
        self.repository.list(pagination.validate()).await
    }

    pub async fn get(&self, id: i64) -> DomainResult<Aviso> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    /// Apply a partial update; only supplied fields change
    pub async fn update(&self, id: i64, changes: AvisoChanges) -> DomainResult<Aviso> {
        self.update_at(id, changes, Utc::now()).await
    }

    pub async fn update_at(
        &self,
        id: i64,
        changes: AvisoChanges,
        now: DateTime<Utc>,
    ) -> DomainResult<Aviso> {
        if changes.is_empty() {
            return Err(DomainError::validation("No fields to update"));
        }
        if let Some(title) = &changes.title {
            require_text("title", title)?;
        }
        if let Some(content) = &changes.content {
            require_text("content", content)?;
        }

        let mut aviso = self.get(id).await?;
        aviso.apply(changes, now);

        let updated = self
            .repository
            .update(&aviso)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))?;
        tracing::info!(aviso_id = id, "Aviso updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(RESOURCE));
        }
        tracing::info!(aviso_id = id, "Aviso deleted");
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}
