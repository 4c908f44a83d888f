//! Type definitions shared by the API and service layers

pub mod pagination;

pub use pagination::Pagination;
