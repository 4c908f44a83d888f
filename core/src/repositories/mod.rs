//! Repository interfaces for data persistence.
//!
//! Every trait is async, `Send + Sync` and object safe so services can hold
//! `Arc<dyn ...Repository>` and the infrastructure crate can plug in the
//! SQLite implementations.

pub mod aviso;
pub mod calendario;
pub mod child;
pub mod rotina;
pub mod saude;
pub mod user;

pub use aviso::AvisoRepository;
pub use calendario::CalendarioRepository;
pub use child::ChildRepository;
pub use rotina::RotinaRepository;
pub use saude::SaudeRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use aviso::MockAvisoRepository;
#[cfg(test)]
pub use calendario::MockCalendarioRepository;
#[cfg(test)]
pub use child::MockChildRepository;
#[cfg(test)]
pub use rotina::MockRotinaRepository;
#[cfg(test)]
pub use saude::MockSaudeRepository;
#[cfg(test)]
pub use user::MockUserRepository;
