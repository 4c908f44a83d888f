//! Child repository trait

use async_trait::async_trait;
use cmei_shared::Pagination;

use crate::domain::entities::child::{Child, ChildParentLink, NewChild};
use crate::errors::DomainError;

/// Persistence operations for children and their parent links
#[async_trait]
pub trait ChildRepository: Send + Sync {
    async fn create(&self, child: &NewChild) -> Result<Child, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Child>, DomainError>;

    async fn list(&self, pagination: Pagination) -> Result<Vec<Child>, DomainError>;

    /// Record that `link.parent_id` is responsible for `link.child_id`
    ///
    /// Returns `false` when the link already existed.
    async fn link_parent(&self, link: ChildParentLink) -> Result<bool, DomainError>;

    /// Children linked to a parent, ordered by id
    async fn find_by_parent(&self, parent_id: i64) -> Result<Vec<Child>, DomainError>;
}
