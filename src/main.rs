use duka_chat::api::{self, app_state::AppState};
use duka_chat::config::ConfigLoader;
use duka_chat::dataset::pattern_table;
use duka_chat::observability::{AppMetrics, ObservabilityState, create_observability_router, init_tracing};
use duka_chat::services::{LexiconScorer, Responder, create_chat_service};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    init_tracing(&config.logging)?;
    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );

    let table = Arc::new(pattern_table(config.chat.dataset)?);
    info!(
        "Pattern table loaded: dataset={}, categories={}, priority={:?}",
        config.chat.dataset.as_str(),
        table.len(),
        table.priority_names()
    );

    let responder = Responder::new(table.clone(), Arc::new(LexiconScorer));
    let metrics = Arc::new(AppMetrics::default());
    let chat_service = create_chat_service(responder, config.chat.clone(), metrics.clone());
    info!("Chat service initialized");

    let app_state = AppState::new(chat_service);

    let observability_state = Arc::new(ObservabilityState::new(
        metrics,
        env!("CARGO_PKG_VERSION"),
        config.chat.dataset.as_str(),
        table.len(),
    ));
    let api_router = api::create_router(app_state, &config);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
