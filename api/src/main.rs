use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{error, info, warn};

use cmei_api::{create_app, AppState};
use cmei_infra::database::SqliteUserRepository;
use cmei_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!("Starting CMEI App API Server ({})", config.environment);

    config.validate().context("invalid configuration")?;
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let pool = cmei_infra::initialize(&config.database)
        .await
        .context("failed to initialize the database")?;

    if config.seed_test_user {
        let users = SqliteUserRepository::new(pool.get_pool().clone());
        match cmei_infra::create_test_user(&users).await {
            Ok(Some(user)) => info!("Created test user '{}'", user.username),
            Ok(None) => info!("Test user already exists"),
            Err(e) => error!("Failed to create test user: {}", e),
        }
    }

    info!("Database pool ready: {}", pool.get_statistics());

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let state = web::Data::new(
        AppState::new(config, pool.clone()).context("failed to build application state")?,
    );

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}
