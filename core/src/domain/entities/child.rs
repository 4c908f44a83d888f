//! Children enrolled at the school and their links to parent accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A child enrolled in a classroom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: i64,
    pub name: String,
    pub birth_date: DateTime<Utc>,
    pub classroom: String,
}

/// Fields required to enrol a child
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChild {
    pub name: String,
    pub birth_date: DateTime<Utc>,
    pub classroom: String,
}

/// Many-to-many relationship between children and parents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildParentLink {
    pub parent_id: i64,
    pub child_id: i64,
}
