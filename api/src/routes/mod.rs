//! Route handlers grouped by resource
//!
//! - `health` - liveness and database diagnostics
//! - `auth` - token issuance and the current user
//! - `avisos` - notices
//! - `children` - children and their parents
//! - `records` - daily routines and health records
//! - `calendario` - school calendar

pub mod auth;
pub mod avisos;
pub mod calendario;
pub mod children;
pub mod health;
pub mod records;

use actix_web::{HttpResponse, ResponseError};
use validator::Validate;

use crate::handlers::ApiError;

/// Runs the request's validation rules, yielding the 400 response on failure
pub(crate) fn validate_request<T: Validate>(request: &T) -> Result<(), HttpResponse> {
    request.validate().map_err(|errors| {
        log::debug!("Request validation failed: {}", errors);
        ApiError::from(errors).error_response()
    })
}
