//! AMY backend
//!
//! Main application entry point

use anyhow::Context;
use tracing::info;

use amy::{
    config::Settings,
    data_fixes::DataFixRunner,
    database::{connection::DatabaseConfig, create_pool, run_migrations, DatabaseService},
    handlers::{create_router, AppState},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", amy::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&DatabaseConfig::from(&settings.database)).await?;

    // Schema migrations, then data fixes
    let data_fixes = DataFixRunner::with_defaults(&settings);
    run_migrations(&db_pool, &data_fixes).await?;

    let database_service = DatabaseService::new(db_pool);
    let app = create_router(AppState::new(database_service, settings.clone()));

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!(address = %address, "AMY is ready");
    axum::serve(listener, app).await?;

    info!("AMY has been shut down.");
    Ok(())
}
