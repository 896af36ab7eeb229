//! Weathercast HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{HistoricalDataPort, PredictionService};
use infrastructure::{AppConfig, ArchiveWeatherAdapter, init_tracing};
use presentation_http::{routes, serve_with_shutdown, state::AppState};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can be honoured
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(config.server.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    info!("Weathercast v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        latitude = config.forecast.location.latitude,
        longitude = config.forecast.location.longitude,
        window_days = config.forecast.training_window_days,
        "Configuration loaded"
    );

    // Initialize archive adapter
    let adapter = ArchiveWeatherAdapter::with_config(config.weather.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize archive client: {e}"))?;
    let source: Arc<dyn HistoricalDataPort> = Arc::new(adapter);

    // Initialize services
    let prediction_service = Arc::new(PredictionService::new(source, config.forecast_settings()));

    match prediction_service.train().await {
        Ok(summary) => info!(
            samples = summary.samples,
            window_start = %summary.window_start,
            window_end = %summary.window_end,
            "Initial training complete"
        ),
        Err(e) => warn!(
            error = %e,
            "Initial training failed; forecasts are unavailable until POST /v1/models/retrain succeeds"
        ),
    }

    let state = AppState::new(prediction_service);

    // Build router with middleware (first added = outermost)
    let app = routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .map_response(axum::response::IntoResponse::into_response)
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
    );

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    serve_with_shutdown(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
