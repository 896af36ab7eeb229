//! Model errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while fitting or querying models
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Prediction was requested before the model set was trained
    #[error("Models have not been trained yet")]
    Untrained,

    /// A single scaler or regressor was used before `fit`
    #[error("{0} is not fitted")]
    NotFitted(&'static str),

    /// No rows to train on
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// Feature matrix and target vector disagree in length
    #[error("Feature matrix has {features} rows but target has {targets} values")]
    DimensionMismatch { features: usize, targets: usize },

    /// Hyperparameters are out of range
    #[error("Invalid model configuration: {0}")]
    InvalidConfig(String),

    /// Input data could not be turned into features or targets
    #[error(transparent)]
    Domain(#[from] DomainError),
}
