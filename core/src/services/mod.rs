//! Business services containing domain logic and use cases.

pub mod auth;
pub mod aviso;
pub mod calendario;
pub mod child;
pub mod rotina;
pub mod saude;
pub mod token;

// Re-export commonly used types
pub use auth::{hash_password, verify_password, AuthService};
pub use aviso::AvisoService;
pub use calendario::CalendarioService;
pub use child::ChildService;
pub use rotina::RotinaService;
pub use saude::SaudeService;
pub use token::{TokenService, TokenServiceConfig};
