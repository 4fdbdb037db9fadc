use auth::PasswordHasher;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vendor_service::config::Config;
use vendor_service::outbound::seed::seed_database;
use vendor_service::outbound::seed::DEFAULT_USERS;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vendor_service=info,seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    let hasher = PasswordHasher::with_params(config.password.into())?;
    seed_database(&pg_pool, &hasher, &DEFAULT_USERS).await?;

    for user in DEFAULT_USERS {
        tracing::info!(email = user.email, role = %user.role, "Test account available");
    }

    Ok(())
}
