use actix_web::{web, HttpResponse};

use cmei_core::CalendarioFilter;

use crate::app::AppState;
use crate::dto::CreateEventoRequest;
use crate::handlers::handle_domain_error;

use super::validate_request;

/// Handler for POST /calendario
pub async fn create_evento(
    state: web::Data<AppState>,
    request: web::Json<CreateEventoRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(response) = validate_request(&request) {
        return response;
    }

    match state.calendario_service.create(request.into()).await {
        Ok(evento) => HttpResponse::Ok().json(evento),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /calendario?from&to
///
/// Both bounds are RFC 3339 timestamps compared against the event start.
pub async fn list_eventos(
    state: web::Data<AppState>,
    query: web::Query<CalendarioFilter>,
) -> HttpResponse {
    match state.calendario_service.list(query.into_inner()).await {
        Ok(eventos) => HttpResponse::Ok().json(eventos),
        Err(e) => handle_domain_error(&e),
    }
}
