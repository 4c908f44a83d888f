//! Mock implementation of AvisoRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cmei_shared::Pagination;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::aviso::{Aviso, NewAviso};
use crate::errors::DomainError;

use super::trait_::AvisoRepository;

/// In-memory notice store
#[derive(Default)]
pub struct MockAvisoRepository {
    avisos: Arc<RwLock<BTreeMap<i64, Aviso>>>,
}

impl MockAvisoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvisoRepository for MockAvisoRepository {
    async fn create(
        &self,
        aviso: &NewAviso,
        author_id: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Aviso, DomainError> {
        let mut avisos = self.avisos.write().await;
        let id = avisos.keys().next_back().copied().unwrap_or(0) + 1;
        let created = Aviso {
            id,
            title: aviso.title.clone(),
            content: aviso.content.clone(),
            created_at,
            updated_at: None,
            author_id,
            target_classroom: aviso.target_classroom.clone(),
        };
        avisos.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Aviso>, DomainError> {
        Ok(self.avisos.read().await.get(&id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Aviso>, DomainError> {
        let avisos = self.avisos.read().await;
        Ok(avisos
            .values()
            .skip(pagination.skip as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, aviso: &Aviso) -> Result<Option<Aviso>, DomainError> {
        let mut avisos = self.avisos.write().await;
        match avisos.get_mut(&aviso.id) {
            Some(stored) => {
                *stored = aviso.clone();
                Ok(Some(aviso.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.avisos.write().await.remove(&id).is_some())
    }
}
