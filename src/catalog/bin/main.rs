use std::sync::Arc;
use tracing::{error, info};
use bookshelf::catalog::bootstrap::seed_demo;
use bookshelf::catalog::controller::router;
use bookshelf::catalog::domain::CatalogService;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logs::setup_tracing;

const DEV_MODE: bool = true;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal {:?}", err);
    }
    info!("shutting down catalog server");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::from_env(if DEV_MODE { "dev" } else { "prod" })?;
    let addr = config.bind_address()?;
    let catalog: Arc<dyn CatalogService> = Arc::from(create_catalog_service(&config));
    if config.seed_demo {
        seed_demo(catalog.as_ref()).await?;
    }

    let app = router(AppState::new(catalog));

    info!("server listening to {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
