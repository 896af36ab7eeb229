//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Forecast API
        .route("/predict_weather", post(handlers::predict::predict_weather))
        // Model API (v1)
        .route("/v1/models", get(handlers::models::model_status))
        .route("/v1/models/retrain", post(handlers::models::retrain))
        // Attach state
        .with_state(state)
}
