//! Calendar repository trait

use async_trait::async_trait;

use crate::domain::entities::calendario::{CalendarioEvento, CalendarioFilter, NewCalendarioEvento};
use crate::errors::DomainError;

/// Persistence operations for calendar events
#[async_trait]
pub trait CalendarioRepository: Send + Sync {
    async fn create(&self, evento: &NewCalendarioEvento) -> Result<CalendarioEvento, DomainError>;

    /// Events whose start date falls inside `filter`, ordered by start date
    async fn list(&self, filter: &CalendarioFilter) -> Result<Vec<CalendarioEvento>, DomainError>;
}

#[cfg(test)]
pub use mock::MockCalendarioRepository;
