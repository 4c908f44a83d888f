//! Mapping of domain errors to HTTP responses

use actix_web::{
    body::BoxBody,
    error::{JsonPayloadError, QueryPayloadError, UrlencodedError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use cmei_core::errors::{AuthError, DomainError, TokenError};
use cmei_shared::{error_codes, ErrorResponse};
use std::fmt;
use validator::ValidationErrors;

/// Message returned for every rejected token, whatever the reason
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Could not validate credentials";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message.as_str())),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )),
        DomainError::Unauthorized => unauthorized(error_codes::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE),
        DomainError::Token(token_error @ TokenError::InvalidToken(_)) => {
            if let Some(kind) = token_error.invalid_kind() {
                log::debug!("Rejected bearer token: {:?}", kind);
            }
            unauthorized(error_codes::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE)
        }
        DomainError::Auth(AuthError::InactiveUser) => HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::INACTIVE_USER, AuthError::InactiveUser.to_string()),
        ),
        DomainError::Internal { .. }
        | DomainError::Token(TokenError::Generation)
        | DomainError::Auth(AuthError::PasswordHashing) => {
            log::error!("Domain Error: {}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } | DomainError::Auth(AuthError::InactiveUser) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Unauthorized | DomainError::Token(TokenError::InvalidToken(_)) => {
            StatusCode::UNAUTHORIZED
        }
        DomainError::Internal { .. }
        | DomainError::Token(TokenError::Generation)
        | DomainError::Auth(AuthError::PasswordHashing) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 401 carrying the bearer challenge header
pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
        .json(ErrorResponse::new(code, message))
}

/// 400 listing the failing validation rules per field
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");
    for (field, field_errors) in errors.field_errors() {
        let codes: Vec<String> = field_errors.iter().map(|e| e.code.to_string()).collect();
        response = response.add_detail(field.to_string(), codes);
    }
    HttpResponse::BadRequest().json(response)
}

/// Error type returned by handlers and extractors
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Validation(ValidationErrors),
    BadRequest(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Domain(e) => write!(f, "{}", e),
            ApiError::Validation(e) => write!(f, "{}", e),
            ApiError::BadRequest(message) => f.write_str(message),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => status_for(error),
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::Validation(errors) => validation_error_response(errors),
            ApiError::BadRequest(message) => HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::BAD_REQUEST, message.clone())),
        }
    }
}

/// JSON body errors as JSON 400s
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

/// Form body errors as JSON 400s
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

/// Query string errors as JSON 400s
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}
