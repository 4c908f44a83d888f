//! SQLite implementations of the core repository traits

mod aviso_repository_impl;
mod calendario_repository_impl;
mod child_repository_impl;
mod rotina_repository_impl;
mod saude_repository_impl;
mod user_repository_impl;

#[cfg(test)]
mod tests;

pub use aviso_repository_impl::SqliteAvisoRepository;
pub use calendario_repository_impl::SqliteCalendarioRepository;
pub use child_repository_impl::SqliteChildRepository;
pub use rotina_repository_impl::SqliteRotinaRepository;
pub use saude_repository_impl::SqliteSaudeRepository;
pub use user_repository_impl::SqliteUserRepository;

use cmei_core::errors::DomainError;

/// Wrap a storage failure with what was being attempted
pub(crate) fn db_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to {}: {}", action, e),
    }
}
