//! # CMEI Core
//!
//! Core business logic and domain layer for the CMEI App backend.
//! This crate contains domain entities, the token service and the other
//! business services, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::*;
pub use domain::value_objects::*;
pub use errors::*;
pub use repositories::{
    AvisoRepository, CalendarioRepository, ChildRepository, RotinaRepository, SaudeRepository,
    UserRepository,
};
pub use services::{
    AuthService, AvisoService, CalendarioService, ChildService, RotinaService, SaudeService,
    TokenService, TokenServiceConfig,
};
