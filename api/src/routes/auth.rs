//! Token issuance and the authenticated user

use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{LoginForm, TokenResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::validate_request;

/// Handler for POST /token
///
/// OAuth2 password flow. Accepts `application/x-www-form-urlencoded`
/// `username` and `password` and returns a bearer token for the username.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///     "token_type": "bearer"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or empty username
pub async fn login(state: web::Data<AppState>, form: web::Form<LoginForm>) -> HttpResponse {
    let form = form.into_inner();
    if let Err(response) = validate_request(&form) {
        return response;
    }

    match state.auth_service.login(&form.username, &form.password) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse::from(token)),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /users/me
///
/// Returns the authenticated user without the password hash.
///
/// ## Errors
/// - 401 Unauthorized: missing or invalid token, or unknown user
/// - 400 Bad Request: the user is inactive
pub async fn read_users_me(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.auth_service.active_user(&auth.username).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => handle_domain_error(&e),
    }
}
