use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use cmei_infra::database::collect_stats;
use cmei_shared::error_codes;

use crate::app::AppState;

pub const API_VERSION: &str = "1.0.0";

/// Handler for GET /health
///
/// Reports the runtime environment, a database round-trip and the contents
/// summary of every table.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status": "healthy",
///     "api_version": "1.0.0",
///     "timestamp": "2025-01-01T10:00:00Z",
///     "environment": { "name": "development", "os": "linux", "arch": "x86_64", "family": "unix" },
///     "database": { "status": "connected", "latency_ms": 0.4, "url": "sqlite://cmei_app.db" },
///     "db_stats": { "tables": ["avisos"], "record_counts": { "avisos": 2 }, "avisos_schema": [], "latest_aviso": null }
/// }
/// ```
///
/// ## Errors
/// - 500 Internal Server Error: `{ "status": "unhealthy", "error": { "type", "message" } }`
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let latency = match state.pool.health_check().await {
        Ok(latency) => latency,
        Err(e) => return unhealthy(error_codes::DATABASE_ERROR, &e.to_string()),
    };

    let stats = match collect_stats(state.pool.get_pool()).await {
        Ok(stats) => stats,
        Err(e) => return unhealthy(error_codes::DATABASE_ERROR, &e.to_string()),
    };

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "api_version": API_VERSION,
        "timestamp": Utc::now().to_rfc3339(),
        "environment": {
            "name": state.config.environment.to_string(),
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
            "family": std::env::consts::FAMILY,
        },
        "database": {
            "status": "connected",
            "latency_ms": latency.as_secs_f64() * 1000.0,
            "url": state.pool.masked_url(),
        },
        "db_stats": stats,
    }))
}

fn unhealthy(error_type: &str, message: &str) -> HttpResponse {
    log::error!("Health check failed: {}", message);
    HttpResponse::InternalServerError().json(json!({
        "status": "unhealthy",
        "error": {
            "type": error_type,
            "message": message,
        },
    }))
}
