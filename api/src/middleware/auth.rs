//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware extracts the bearer token from the Authorization header,
//! verifies it with the [`TokenService`] registered as app data and injects
//! an [`AuthContext`] into the request. Every failure short-circuits with the
//! same JSON 401 carrying `WWW-Authenticate: Bearer`.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use cmei_core::errors::DomainError;
use cmei_core::services::token::TokenService;
use cmei_shared::error_codes;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::error::{handle_domain_error, unauthorized, ApiError, INVALID_CREDENTIALS_MESSAGE};

/// Authenticated subject injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Username carried in the token's `sub` claim
    pub username: String,
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token_service = match req.app_data::<web::Data<TokenService>>().cloned() {
                Some(token_service) => token_service,
                None => {
                    log::error!("JwtAuth used without a TokenService in app data");
                    let response =
                        handle_domain_error(&DomainError::internal("Token service not configured"));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            // Extract token from Authorization header
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let response = unauthorized(error_codes::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            match token_service.verify(&token) {
                Ok(username) => {
                    req.extensions_mut().insert(AuthContext { username });
                }
                Err(error) => {
                    let response = handle_domain_error(&DomainError::from(error));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

/// Extracts Bearer token from Authorization header
///
/// The scheme is matched case-insensitively; an empty token counts as missing.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or(ApiError::Domain(DomainError::Unauthorized));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;

    #[test]
    fn test_extract_bearer_token() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_lowercase = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "bearer test_token_123"))
            .to_srv_request();
        assert_eq!(
            extract_bearer_token(&req_lowercase),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_basic = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_basic), None);

        let req_empty = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = actix_test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
