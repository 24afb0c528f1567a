pub mod config;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use axum::Router;
use config::AppConfig;
use modules::lookup::{router, LookupService, NotionClient};
use shared::utils::init_logger;

/// Wire the Notion store, lookup pipeline and HTTP routes from configuration
pub fn build_app(config: &AppConfig) -> shared::AppResult<Router> {
    let store = NotionClient::new(config.notion.clone(), Arc::new(config.schema.clone()))?;
    let service = LookupService::with_settings(Arc::new(store), config.lookup.clone())?;

    tracing::info!(
        "Lookup service ready (filter mode: {}, database: {})",
        service.filter_mode(),
        config.notion.database_id
    );

    Ok(router(Arc::new(service)))
}

pub async fn run() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env()?;
    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
