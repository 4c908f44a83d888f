//! Mock implementation of ChildRepository for testing

use async_trait::async_trait;
use cmei_shared::Pagination;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::child::{Child, ChildParentLink, NewChild};
use crate::errors::DomainError;

use super::trait_::ChildRepository;

/// In-memory child store
#[derive(Default)]
pub struct MockChildRepository {
    children: Arc<RwLock<BTreeMap<i64, Child>>>,
    // (parent_id, child_id)
    links: Arc<RwLock<BTreeSet<(i64, i64)>>>,
}

impl MockChildRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChildRepository for MockChildRepository {
    async fn create(&self, child: &NewChild) -> Result<Child, DomainError> {
        let mut children = self.children.write().await;
        let id = children.keys().next_back().copied().unwrap_or(0) + 1;
        let created = Child {
            id,
            name: child.name.clone(),
            birth_date: child.birth_date,
            classroom: child.classroom.clone(),
        };
        children.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Child>, DomainError> {
        Ok(self.children.read().await.get(&id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Child>, DomainError> {
        let children = self.children.read().await;
        Ok(children
            .values()
            .skip(pagination.skip as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect())
    }

    async fn link_parent(&self, link: ChildParentLink) -> Result<bool, DomainError> {
        let mut links = self.links.write().await;
        Ok(links.insert((link.parent_id, link.child_id)))
    }

    async fn find_by_parent(&self, parent_id: i64) -> Result<Vec<Child>, DomainError> {
        let links = self.links.read().await;
        let children = self.children.read().await;
        Ok(links
            .iter()
            .filter(|(parent, _)| *parent == parent_id)
            .filter_map(|(_, child_id)| children.get(child_id).cloned())
            .collect())
    }
}
