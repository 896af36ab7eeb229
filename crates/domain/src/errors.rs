//! Domain-level errors

use thiserror::Error;

use crate::entities::ObservationField;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Observation data does not have the expected shape
    #[error("Malformed observation data: {0}")]
    DataShape(String),

    /// A field has no values anywhere in the series, so it cannot be filled
    #[error("Field '{0}' has no values in the observation series")]
    AllMissingField(ObservationField),

    /// A value is still missing where a complete record is required
    #[error("Missing {field} value at record {index}")]
    MissingValue {
        field: ObservationField,
        index: usize,
    },
}

impl DomainError {
    /// Create a data shape error
    pub fn data_shape(msg: impl Into<String>) -> Self {
        Self::DataShape(msg.into())
    }
}
