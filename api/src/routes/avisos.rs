//! Notices published to parents
//!
//! Reading is public; publishing, editing and removing need a bearer token.

use actix_web::{web, HttpResponse};

use cmei_core::AvisoChanges;
use cmei_shared::Pagination;

use crate::app::AppState;
use crate::dto::CreateAvisoRequest;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::validate_request;

/// Handler for POST /avisos
///
/// The author is the authenticated user, who must be active.
pub async fn create_aviso(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateAvisoRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(response) = validate_request(&request) {
        return response;
    }

    let author = match state.auth_service.active_user(&auth.username).await {
        Ok(user) => user,
        Err(e) => return handle_domain_error(&e),
    };

    match state.aviso_service.create(request.into(), author.id).await {
        Ok(aviso) => {
            log::info!("Aviso {} published by {}", aviso.id, author.username);
            HttpResponse::Ok().json(aviso)
        }
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /avisos?skip&limit
pub async fn list_avisos(
    state: web::Data<AppState>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state.aviso_service.list(query.into_inner()).await {
        Ok(avisos) => HttpResponse::Ok().json(avisos),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /avisos/{id}
pub async fn get_aviso(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    match state.aviso_service.get(path.into_inner()).await {
        Ok(aviso) => HttpResponse::Ok().json(aviso),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for PUT /avisos/{id}
///
/// Partial update: absent fields keep their value, an explicit
/// `"target_classroom": null` widens the notice to every classroom.
pub async fn update_aviso(
    state: web::Data<AppState>,
    _auth: AuthContext,
    path: web::Path<i64>,
    changes: web::Json<AvisoChanges>,
) -> HttpResponse {
    match state
        .aviso_service
        .update(path.into_inner(), changes.into_inner())
        .await
    {
        Ok(aviso) => HttpResponse::Ok().json(aviso),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for DELETE /avisos/{id}
pub async fn delete_aviso(
    state: web::Data<AppState>,
    _auth: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    match state.aviso_service.delete(id).await {
        Ok(()) => {
            log::info!("Aviso {} deleted", id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => handle_domain_error(&e),
    }
}
