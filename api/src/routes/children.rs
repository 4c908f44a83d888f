use actix_web::{web, HttpResponse};

use cmei_shared::Pagination;

use crate::app::AppState;
use crate::dto::{CreateChildRequest, LinkParentRequest};
use crate::handlers::handle_domain_error;

use super::validate_request;

/// Handler for POST /children
pub async fn create_child(
    state: web::Data<AppState>,
    request: web::Json<CreateChildRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(response) = validate_request(&request) {
        return response;
    }

    match state.child_service.create(request.into()).await {
        Ok(child) => HttpResponse::Ok().json(child),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /children?skip&limit
pub async fn list_children(
    state: web::Data<AppState>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state.child_service.list(query.into_inner()).await {
        Ok(children) => HttpResponse::Ok().json(children),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /children/{id}
pub async fn get_child(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    match state.child_service.get(path.into_inner()).await {
        Ok(child) => HttpResponse::Ok().json(child),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for POST /children/{id}/parents
///
/// Linking an already linked parent succeeds without duplicating the link.
pub async fn link_parent(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    request: web::Json<LinkParentRequest>,
) -> HttpResponse {
    match state
        .child_service
        .link_parent(path.into_inner(), request.parent_id)
        .await
    {
        Ok(link) => HttpResponse::Ok().json(link),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /users/{id}/children
pub async fn children_of_parent(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    match state.child_service.children_of(path.into_inner()).await {
        Ok(children) => HttpResponse::Ok().json(children),
        Err(e) => handle_domain_error(&e),
    }
}
