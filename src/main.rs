use std::sync::Arc;

use personality_engine::adapters::catalog::FileCatalogSource;
use personality_engine::adapters::http::{build_router, PersonalityAppState};
use personality_engine::bootstrap::{build_engine, init_tracing, StartupError};
use personality_engine::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level, config.is_production());
    config.validate()?;

    let source = FileCatalogSource::new(
        config.catalog.questions_path.clone(),
        config.catalog.types_path.clone(),
    );
    let engine = build_engine(&source, config.catalog.require_complete_types)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load catalogs: {}", e);
            e
        })?;

    let state = PersonalityAppState::new(Arc::new(engine));
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
