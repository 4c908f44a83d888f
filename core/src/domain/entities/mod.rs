//! Domain entities representing core business objects.

pub mod aviso;
pub mod calendario;
pub mod child;
pub mod rotina;
pub mod saude;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use aviso::{Aviso, AvisoChanges, NewAviso};
pub use calendario::{CalendarioEvento, CalendarioFilter, NewCalendarioEvento};
pub use child::{Child, ChildParentLink, NewChild};
pub use rotina::{NewRotina, Rotina};
pub use saude::{NewSaudeRecord, SaudeRecord, MAX_TEMPERATURE, MIN_TEMPERATURE};
pub use token::{Claims, DEFAULT_TOKEN_EXPIRY_MINUTES};
pub use user::{NewUser, User, UserType};
