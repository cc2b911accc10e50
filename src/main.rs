use std::sync::Arc;

use movie_catalog::{
    api,
    config::AppConfig,
    database::Database,
    models::SystemClock,
    services::{flash::FLASH_CLEANUP_INTERVAL, FlashCleanupTask, FlashStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    let database = Database::connect(&config.database_url).await?;

    // Start flash cleanup task
    let flash = FlashStore::default();
    tokio::spawn(FlashCleanupTask::new(flash.clone(), FLASH_CLEANUP_INTERVAL).start());

    let state = api::AppState::new(database, Arc::new(SystemClock), flash);
    let app = api::router(state);

    let addr = config.listen_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
