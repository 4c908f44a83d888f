//! Child enrolment and parent links

use std::sync::Arc;

use cmei_shared::Pagination;

use crate::domain::entities::child::{Child, ChildParentLink, NewChild};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ChildRepository, UserRepository};

pub struct ChildService {
    children: Arc<dyn ChildRepository>,
    users: Arc<dyn UserRepository>,
}

impl ChildService {
    pub fn new(children: Arc<dyn ChildRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { children, users }
    }

    pub async fn create(&self, child: NewChild) -> DomainResult<Child> {
        if child.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if child.classroom.trim().is_empty() {
            return Err(DomainError::validation("classroom must not be empty"));
        }

        let created = self.children.create(&child).await?;
        tracing::info!(child_id = created.id, "Child enrolled");
        Ok(created)
    }

    pub async fn list(&self, pagination: Pagination) -> DomainResult<Vec<Child>> {
        self.children.list(pagination.validate()).await
    }

    pub async fn get(&self, id: i64) -> DomainResult<Child> {
        self.children
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Child"))
    }

    /// Link a parent account to a child; both must exist.
    ///
    /// Linking twice is not an error.
    pub async fn link_parent(&self, child_id: i64, parent_id: i64) -> DomainResult<ChildParentLink> {
        self.get(child_id).await?;
        if self.users.find_by_id(parent_id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        let link = ChildParentLink {
            parent_id,
            child_id,
        };
        if self.children.link_parent(link).await? {
            tracing::info!(child_id, parent_id, "Parent linked to child");
        }
        Ok(link)
    }

    pub async fn children_of(&self, parent_id: i64) -> DomainResult<Vec<Child>> {
        self.children.find_by_parent(parent_id).await
    }
}
