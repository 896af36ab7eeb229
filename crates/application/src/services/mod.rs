//! Application services - Use case implementations

pub mod forecast_formatter;
mod prediction_service;

pub use forecast_formatter::{format_forecast, round_to_cents};
pub use prediction_service::{
    ForecastSettings, ModelStatus, PredictionService, TrainingSummary,
};
