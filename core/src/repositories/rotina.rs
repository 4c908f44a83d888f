//! Daily routine repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cmei_shared::Pagination;

use crate::domain::entities::rotina::{NewRotina, Rotina};
use crate::errors::DomainError;

/// Persistence operations for daily routines
#[async_trait]
pub trait RotinaRepository: Send + Sync {
    /// Insert a routine dated `date`; `rotina.date` is ignored
    async fn create(&self, rotina: &NewRotina, date: DateTime<Utc>) -> Result<Rotina, DomainError>;

    /// Routines ordered by id, optionally restricted to one child
    async fn list(
        &self,
        child_id: Option<i64>,
        pagination: Pagination,
    ) -> Result<Vec<Rotina>, DomainError>;
}

#[cfg(test)]
pub use mock::MockRotinaRepository;

#[cfg(test)]
mod mock {
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use super::*;

    #[derive(Default)]
    pub struct MockRotinaRepository {
        rotinas: Arc<RwLock<Vec<Rotina>>>,
    }

    impl MockRotinaRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl RotinaRepository for MockRotinaRepository {
        async fn create(
            &self,
            rotina: &NewRotina,
            date: DateTime<Utc>,
        ) -> Result<Rotina, DomainError> {
            let mut rotinas = self.rotinas.write().await;
            let created = Rotina {
                id: rotinas.len() as i64 + 1,
                date,
                child_id: rotina.child_id,
                meals: rotina.meals.clone(),
                sleep: rotina.sleep.clone(),
                activities: rotina.activities.clone(),
                notes: rotina.notes.clone(),
            };
            rotinas.push(created.clone());
            Ok(created)
        }

        async fn list(
            &self,
            child_id: Option<i64>,
            pagination: Pagination,
        ) -> Result<Vec<Rotina>, DomainError> {
            let rotinas = self.rotinas.read().await;
            Ok(rotinas
                .iter()
                .filter(|r| child_id.map_or(true, |id| r.child_id == id))
                .skip(pagination.skip as usize)
                .take(pagination.limit as usize)
                .cloned()
                .collect())
        }
    }
}
