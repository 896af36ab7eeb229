//! Model status and retraining handlers

use application::{ModelStatus, TrainingSummary};
use axum::{Json, extract::State};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Report whether the models are trained and when they were last fitted
pub async fn model_status(State(state): State<AppState>) -> Json<ModelStatus> {
    Json(state.prediction_service.status())
}

/// Refit every model on a freshly fetched window
#[instrument(skip(state))]
pub async fn retrain(State(state): State<AppState>) -> Result<Json<TrainingSummary>, ApiError> {
    match state.prediction_service.train().await {
        Ok(summary) => {
            info!(samples = summary.samples, "Retrain requested via API completed");
            Ok(Json(summary))
        },
        Err(e) => {
            warn!(error = %e, "Retrain failed");
            Err(ApiError::ServiceUnavailable(e.to_string()))
        },
    }
}
