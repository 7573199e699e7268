mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::{Json, Router, routing::get};
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{AppConfig, DatabaseConfig},
    domain::repositories::user_repository::UserRepository,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, email_validator::StandardEmailValidator,
        in_memory_user_repository::InMemoryUserRepository,
        user_repository::PostgresUserRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::{get_account_usecase::GetAccountUsecase, register_user_usecase::RegisterUserUsecase},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let app = match &config.database {
        Some(database) => {
            let user_repository = connect(database).await?;
            tracing::info!("using postgres account store");
            build_app(user_repository)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, accounts are kept in memory");
            build_app(InMemoryUserRepository::new())
        }
    };

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn connect(
    database: &DatabaseConfig,
) -> Result<PostgresUserRepository, Box<dyn std::error::Error>> {
    let mut opt = ConnectOptions::new(database.url.clone());
    opt.max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    let user_repository = PostgresUserRepository::new(db);
    if database.auto_create_schema {
        user_repository.ensure_schema().await?;
    }
    Ok(user_repository)
}

fn build_app<R: UserRepository + Clone + 'static>(user_repository: R) -> Router {
    let register_user_usecase = RegisterUserUsecase::new(
        StandardEmailValidator::new(),
        Argon2PasswordHasher::new(),
        user_repository.clone(),
    );
    let get_account_usecase = GetAccountUsecase::new(user_repository);

    Router::new()
        .route("/health", get(health))
        .nest(
            "/api",
            create_user_router(register_user_usecase, get_account_usecase),
        )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
