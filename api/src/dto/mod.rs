pub mod auth;
pub mod records;

pub use auth::{LoginForm, TokenResponse};
pub use records::{
    CreateAvisoRequest, CreateChildRequest, CreateEventoRequest, LinkParentRequest,
    RecordListQuery,
};
