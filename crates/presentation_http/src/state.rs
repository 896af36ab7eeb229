//! Application state shared across handlers

use std::sync::Arc;

use application::PredictionService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Forecast use case holding the trained models
    pub prediction_service: Arc<PredictionService>,
}

impl AppState {
    #[must_use]
    pub fn new(prediction_service: Arc<PredictionService>) -> Self {
        Self { prediction_service }
    }
}
