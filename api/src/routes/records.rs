//! Daily routines ("rotina") and health records ("saude") kept per child

use actix_web::{web, HttpResponse};

use cmei_core::{NewRotina, NewSaudeRecord};

use crate::app::AppState;
use crate::dto::RecordListQuery;
use crate::handlers::handle_domain_error;

/// Handler for POST /rotina
pub async fn create_rotina(
    state: web::Data<AppState>,
    request: web::Json<NewRotina>,
) -> HttpResponse {
    match state.rotina_service.record(request.into_inner()).await {
        Ok(rotina) => HttpResponse::Ok().json(rotina),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /rotina?child_id&skip&limit
pub async fn list_rotinas(
    state: web::Data<AppState>,
    query: web::Query<RecordListQuery>,
) -> HttpResponse {
    match state
        .rotina_service
        .list(query.child_id, query.pagination())
        .await
    {
        Ok(rotinas) => HttpResponse::Ok().json(rotinas),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for POST /saude
pub async fn create_saude(
    state: web::Data<AppState>,
    request: web::Json<NewSaudeRecord>,
) -> HttpResponse {
    match state.saude_service.record(request.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /saude?child_id&skip&limit
pub async fn list_saude(
    state: web::Data<AppState>,
    query: web::Query<RecordListQuery>,
) -> HttpResponse {
    match state
        .saude_service
        .list(query.child_id, query.pagination())
        .await
    {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => handle_domain_error(&e),
    }
}
