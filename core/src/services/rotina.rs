//! Daily routine records

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cmei_shared::Pagination;

use crate::domain::entities::rotina::{NewRotina, Rotina};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ChildRepository, RotinaRepository};

pub struct RotinaService {
    rotinas: Arc<dyn RotinaRepository>,
    children: Arc<dyn ChildRepository>,
}

impl RotinaService {
    pub fn new(rotinas: Arc<dyn RotinaRepository>, children: Arc<dyn ChildRepository>) -> Self {
        Self { rotinas, children }
    }

    /// Record a routine for an existing child, dated now unless given
    pub async fn record(&self, rotina: NewRotina) -> DomainResult<Rotina> {
        self.record_at(rotina, Utc::now()).await
    }

    pub async fn record_at(&self, rotina: NewRotina, now: DateTime<Utc>) -> DomainResult<Rotina> {
        if self.children.find_by_id(rotina.child_id).await?.is_none() {
            return Err(DomainError::not_found("Child"));
        }

        let date = rotina.date.unwrap_or(now);
        let created = self.rotinas.create(&rotina, date).await?;
        tracing::debug!(rotina_id = created.id, child_id = created.child_id, "Rotina recorded");
        Ok(created)
    }

    pub async fn list(
        &self,
        child_id: Option<i64>,
        pagination: Pagination,
    ) -> DomainResult<Vec<Rotina>> {
        self.rotinas.list(child_id, pagination.validate()).await
    }
}
