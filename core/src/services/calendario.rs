//! School calendar

use std::sync::Arc;

use crate::domain::entities::calendario::{CalendarioEvento, CalendarioFilter, NewCalendarioEvento};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CalendarioRepository;

pub struct CalendarioService {
    repository: Arc<dyn CalendarioRepository>,
}

impl CalendarioService {
    pub fn new(repository: Arc<dyn CalendarioRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, evento: NewCalendarioEvento) -> DomainResult<CalendarioEvento> {
        if evento.title.trim().is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        if !evento.has_valid_range() {
            return Err(DomainError::validation("end_date must not be before start_date"));
        }

        let created = self.repository.create(&evento).await?;
        tracing::info!(evento_id = created.id, "Calendar event created");
        Ok(created)
    }

    /// Events starting inside the window, earliest first
    pub async fn list(&self, filter: CalendarioFilter) -> DomainResult<Vec<CalendarioEvento>> {
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            if from > to {
                return Err(DomainError::validation("from must not be after to"));
            }
        }
        self.repository.list(&filter).await
    }
}
