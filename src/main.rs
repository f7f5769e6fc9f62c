use std::{process::ExitCode, str::FromStr};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_seeder::{config::Config, errors::AppError, services::seed_service::seed_database};

async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

async fn run(pool: &SqlitePool, config: &Config) -> Result<(), AppError> {
    if config.run_migrations {
        sqlx::migrate!().run(pool).await?;
        tracing::debug!("migrations applied");
    }
    let report = seed_database(pool).await?;
    tracing::info!(
        "users: {}, courses: {}, registrations: {}",
        report.users,
        report.courses,
        report.registrations
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_seeder=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(code = %e.code(), "{}", e);
            return ExitCode::FAILURE;
        }
    };
    let pool = match connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(code = %e.code(), "failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let result = run(&pool, &config).await;
    pool.close().await;
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = %e.code(), "seeding failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
