use anyhow::{Context, Result};
use lumen_cdn::{CloudinaryClient, UrlBuilder};
use lumen_core::init_telemetry;
use lumen_database::{
    ImageRepository, MemoryImageRepository, PostgresImageRepository, establish_pool,
    run_migrations,
};
use lumen_server::{AppState, ServerConfig, create_router, with_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    init_telemetry(*config.log_format(), "info").map_err(|e| anyhow::anyhow!(e))?;

    let repository = connect_repository(config.database_url().as_deref()).await?;
    let provider = Arc::new(CloudinaryClient::new(config.cdn().clone()));
    let state = AppState::new(
        provider,
        repository,
        UrlBuilder::new(config.cdn()),
        *config.limits(),
    );

    let app = with_middleware(create_router(state), config.cors_origin()?)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], *config.port()));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        %addr,
        environment = %config.environment(),
        cloud = %config.cdn().cloud_name(),
        "Lumen listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn connect_repository(database_url: Option<&str>) -> Result<Arc<dyn ImageRepository>> {
    let Some(url) = database_url else {
        warn!("DATABASE_URL not set, records are kept in memory and lost on exit");
        return Ok(Arc::new(MemoryImageRepository::new()));
    };

    let url = url.to_string();
    let pool = tokio::task::spawn_blocking(move || {
        let pool = establish_pool(&url)?;
        run_migrations(&pool)?;
        Ok::<_, lumen_database::DatabaseError>(pool)
    })
    .await??;

    info!("Connected to PostgreSQL");
    Ok(Arc::new(PostgresImageRepository::new(pool)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
