//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Logger, NormalizePath},
    web, App, Error, HttpResponse,
};

use cmei_core::{
    AuthService, AvisoService, CalendarioService, ChildService, DomainError, RotinaService,
    SaudeService, TokenService, TokenServiceConfig,
};
use cmei_infra::database::{
    SqliteAvisoRepository, SqliteCalendarioRepository, SqliteChildRepository,
    SqliteRotinaRepository, SqliteSaudeRepository, SqliteUserRepository,
};
use cmei_infra::DatabasePool;
use cmei_shared::{error_codes, AppConfig, ErrorResponse};

use crate::handlers::error::{form_error_handler, json_error_handler, query_error_handler};
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{auth, avisos, calendario, children, health, records};

/// Application state that holds shared services
pub struct AppState {
    pub config: AppConfig,
    pub pool: DatabasePool,
    pub token_service: Arc<TokenService>,
    pub auth_service: AuthService,
    pub aviso_service: AvisoService,
    pub child_service: ChildService,
    pub rotina_service: RotinaService,
    pub saude_service: SaudeService,
    pub calendario_service: CalendarioService,
}

impl AppState {
    /// Wire the SQLite repositories into the domain services
    ///
    /// Fails when the JWT settings cannot produce a token service.
    pub fn new(config: AppConfig, pool: DatabasePool) -> Result<Self, DomainError> {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from_jwt_config(
            &config.jwt,
        )?)?);

        let sqlite = pool.get_pool().clone();
        let users = Arc::new(SqliteUserRepository::new(sqlite.clone()));
        let children = Arc::new(SqliteChildRepository::new(sqlite.clone()));

        Ok(Self {
            auth_service: AuthService::new(users.clone(), token_service.clone()),
            aviso_service: AvisoService::new(Arc::new(SqliteAvisoRepository::new(sqlite.clone()))),
            child_service: ChildService::new(children.clone(), users),
            rotina_service: RotinaService::new(
                Arc::new(SqliteRotinaRepository::new(sqlite.clone())),
                children.clone(),
            ),
            saude_service: SaudeService::new(
                Arc::new(SqliteSaudeRepository::new(sqlite.clone())),
                children,
            ),
            calendario_service: CalendarioService::new(Arc::new(SqliteCalendarioRepository::new(
                sqlite,
            ))),
            token_service,
            config,
            pool,
        })
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = create_cors(&app_state.config.cors);
    let token_service = web::Data::from(app_state.token_service.clone());

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(token_service)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Add middleware (order matters: path normalization first, then CORS, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(NormalizePath::trim())
        // Health check endpoint
        .route("/health", web::get().to(health::health_check))
        // Authentication
        .route("/token", web::post().to(auth::login))
        .route(
            "/users/me",
            web::get().to(auth::read_users_me).wrap(JwtAuth::new()),
        )
        .route(
            "/users/{id}/children",
            web::get().to(children::children_of_parent).wrap(JwtAuth::new()),
        )
        // Notices: reads are public
        .service(
            web::resource("/avisos")
                .route(web::get().to(avisos::list_avisos))
                .route(web::post().to(avisos::create_aviso).wrap(JwtAuth::new())),
        )
        .service(
            web::resource("/avisos/{id}")
                .route(web::get().to(avisos::get_aviso))
                .route(web::put().to(avisos::update_aviso).wrap(JwtAuth::new()))
                .route(web::delete().to(avisos::delete_aviso).wrap(JwtAuth::new())),
        )
        // Children
        .service(
            web::resource("/children")
                .route(web::get().to(children::list_children).wrap(JwtAuth::new()))
                .route(web::post().to(children::create_child).wrap(JwtAuth::new())),
        )
        .route(
            "/children/{id}",
            web::get().to(children::get_child).wrap(JwtAuth::new()),
        )
        .route(
            "/children/{id}/parents",
            web::post().to(children::link_parent).wrap(JwtAuth::new()),
        )
        // Daily records
        .service(
            web::resource("/rotina")
                .route(web::get().to(records::list_rotinas).wrap(JwtAuth::new()))
                .route(web::post().to(records::create_rotina).wrap(JwtAuth::new())),
        )
        .service(
            web::resource("/saude")
                .route(web::get().to(records::list_saude).wrap(JwtAuth::new()))
                .route(web::post().to(records::create_saude).wrap(JwtAuth::new())),
        )
        // Calendar
        .service(
            web::resource("/calendario")
                .route(web::get().to(calendario::list_eventos).wrap(JwtAuth::new()))
                .route(web::post().to(calendario::create_evento).wrap(JwtAuth::new())),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
