//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 100;

/// Offset pagination parameters (`?skip=0&limit=100`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of items to skip
    #[serde(default)]
    pub skip: u32,

    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with sanitized values
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }.validate()
    }

    /// Clamp the limit into `1..=MAX_LIMIT`
    pub fn validate(mut self) -> Self {
        self.limit = self.limit.clamp(1, MAX_LIMIT);
        self
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.skip as i64
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.limit as i64
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
