//! FocusFlow API server entrypoint.
//!
//! Wires configuration, the connection pool, and the adapters into the
//! router, then serves until a termination signal drains in-flight requests.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use secrecy::Secret;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use focusflow_api::adapters::auth::{SupabaseConfig, SupabaseSessionValidator};
use focusflow_api::adapters::http::{
    app_router, AuthState, ChatHandlers, HealthState, OnboardingHandlers,
};
use focusflow_api::adapters::postgres::{
    PostgresConversationRepository, PostgresProfileRepository, PostgresStoreProbe,
    PostgresUserRepository,
};
use focusflow_api::application::handlers::chat::SendChatMessageHandler;
use focusflow_api::application::handlers::onboarding::CompleteOnboardingHandler;
use focusflow_api::config::{AppConfig, ValidationError};
use focusflow_api::ports::{ConversationRepository, ProfileRepository, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    // Process-wide collaborators, constructed once and injected everywhere.
    let validator: AuthState = Arc::new(SupabaseSessionValidator::new(SupabaseConfig::new(
        &config.auth.supabase_url,
        Secret::new(config.auth.supabase_anon_key.clone()),
    )));
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));
    let conversations: Arc<dyn ConversationRepository> =
        Arc::new(PostgresConversationRepository::new(pool.clone()));
    let probe = Arc::new(PostgresStoreProbe::new(pool.clone()));

    let onboarding = OnboardingHandlers::new(Arc::new(CompleteOnboardingHandler::new(
        users.clone(),
        profiles,
    )));
    let chat = ChatHandlers::new(Arc::new(SendChatMessageHandler::new(users, conversations)));
    let health = HealthState::new(probe);

    let cors_origin: HeaderValue = config
        .server
        .cors_origin
        .parse()
        .map_err(|_| ValidationError::InvalidCorsOrigin)?;

    let app = app_router(
        health,
        onboarding,
        chat,
        validator,
        cors_origin,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "focusflow api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // In-flight requests have drained; release the store connections.
    pool.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining in-flight requests");
}
