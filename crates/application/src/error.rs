//! Application-level errors

use domain::{DomainError, ObservationField};
use forecast_core::ModelError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// Upstream historical data could not be retrieved
    #[error("Failed to fetch historical weather data: {0}")]
    Fetch(String),

    /// Observation data had an unexpected shape
    #[error("Malformed observation data: {0}")]
    DataShape(String),

    /// A field was missing for the entire window
    #[error("Field '{0}' has no values in the fetched window")]
    AllMissingField(ObservationField),

    /// Prediction was requested before the models were trained
    #[error("Models have not been trained yet")]
    UntrainedModel,

    /// Model fitting or inference failed
    #[error("Model error: {0}")]
    Model(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DataShape(msg) => Self::DataShape(msg),
            DomainError::AllMissingField(field) => Self::AllMissingField(field),
            missing @ DomainError::MissingValue { .. } => Self::DataShape(missing.to_string()),
        }
    }
}

impl From<ModelError> for ApplicationError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Untrained => Self::UntrainedModel,
            ModelError::Domain(domain) => domain.into(),
            other => Self::Model(other.to_string()),
        }
    }
}
