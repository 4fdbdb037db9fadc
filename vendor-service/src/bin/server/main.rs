use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::TokenCodec;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vendor_service::config::Config;
use vendor_service::domain::authentication::service::AuthService;
use vendor_service::domain::transaction::service::TransactionService;
use vendor_service::inbound::http::router::create_router;
use vendor_service::outbound::repositories::PostgresCredentialStore;
use vendor_service::outbound::repositories::PostgresTransactionLogRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vendor_service=debug,auth=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "vendor-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        argon2_memory_kib = config.password.memory_kib,
        argon2_iterations = config.password.iterations,
        "Configuration loaded"
    );

    if !config.jwt.has_strong_secret() {
        tracing::warn!(
            secret_bytes = config.jwt.secret.len(),
            "JWT secret is shorter than 32 bytes"
        );
    }
    if config.jwt.uses_development_secret() {
        tracing::warn!("JWT secret is the development default; set JWT__SECRET");
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        PasswordHasher::with_params(config.password.into())?,
        TokenCodec::new(
            config.jwt.secret.as_bytes(),
            chrono::Duration::hours(config.jwt.expiration_hours),
        ),
    ));
    let credential_store = Arc::new(PostgresCredentialStore::new(pg_pool.clone()));
    let transaction_repository = Arc::new(PostgresTransactionLogRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        credential_store,
        Arc::clone(&authenticator),
    ));
    let transaction_service = Arc::new(TransactionService::new(transaction_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, transaction_service, authenticator);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
