//! CORS middleware configuration for cross-origin requests.
//!
//! Browsers and the mobile app call the API from other origins. With no
//! configured origins every origin is accepted, otherwise only the listed ones.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use cmei_shared::CorsConfig;

/// Creates a CORS middleware instance from the loaded configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age)
        .supports_credentials();

    if config.allows_any_origin() {
        log::info!("CORS: accepting any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            log::info!("CORS: adding allowed origin {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
